//! Board coordinates.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A validated `(row, column)` coordinate on the 3x3 board.
///
/// Rows count top to bottom and columns left to right, both from zero.
/// The row-major index (0-8) is what the board stores squares by.
/// Deserializing goes through [`Cell::new`], so off-board values are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    column: u8,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// The middle of the board; it lies on both diagonals.
    pub const CENTER: Cell = Cell::at(1, 1);

    /// Creates a cell, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { row, column });
        }
        Ok(Self::at(row as u8, column as u8))
    }

    /// Builds a cell from coordinates already known to be in range.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Creates a cell from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts the cell to its row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// Row of the cell, 0 at the top.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column of the cell, 0 at the left.
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// True for (0,0), (1,1) and (2,2).
    pub fn is_on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// True for (0,2), (1,1) and (2,0).
    pub fn is_on_anti_diagonal(self) -> bool {
        self.row() + self.column() == BOARD_SIZE - 1
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.column) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

/// Unchecked wire form of [`Cell`].
#[derive(Deserialize)]
struct RawCell {
    row: usize,
    column: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = EngineError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.column)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (index, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), index);
            assert_eq!(Cell::from_index(index), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Cell::new(3, 0),
            Err(EngineError::OutOfBounds { row: 3, column: 0 })
        );
        assert_eq!(
            Cell::new(0, 7),
            Err(EngineError::OutOfBounds { row: 0, column: 7 })
        );
        assert_eq!(Cell::new(2, 1).map(Cell::index), Ok(7));
    }

    #[test]
    fn test_diagonal_membership() {
        let main: Vec<_> = Cell::ALL
            .iter()
            .filter(|c| c.is_on_main_diagonal())
            .map(|c| c.index())
            .collect();
        let anti: Vec<_> = Cell::ALL
            .iter()
            .filter(|c| c.is_on_anti_diagonal())
            .map(|c| c.index())
            .collect();

        assert_eq!(main, vec![0, 4, 8]);
        assert_eq!(anti, vec![2, 4, 6]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Cell::ALL[0].label(), "Top-left");
        assert_eq!(Cell::CENTER.label(), "Center");
        assert_eq!(Cell::ALL[8].label(), "Bottom-right");
        assert_eq!(Cell::CENTER.to_string(), "Center (1, 1)");
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let cell: Cell = serde_json::from_str(r#"{"row":2,"column":1}"#).unwrap();
        assert_eq!(cell.index(), 7);
        assert_eq!(
            serde_json::to_string(&Cell::CENTER).unwrap(),
            r#"{"row":1,"column":1}"#
        );

        let err = serde_json::from_str::<Cell>(r#"{"row":3,"column":0}"#).unwrap_err();
        assert!(err.to_string().contains("Cell (3, 0) is outside the 3x3 board"));
    }
}
