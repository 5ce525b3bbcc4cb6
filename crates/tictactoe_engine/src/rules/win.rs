//! Win detection logic for tic-tac-toe.

use super::super::{BOARD_SIZE, Board, Cell, EngineError, Player, Square};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::instrument;

/// The shape of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WinKind {
    /// Three across.
    Row,
    /// Three down.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Identifies which line won the game.
///
/// Rows and columns carry their index (0-2); the diagonals are unique.
/// Deserializing rejects indices outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWinInfo")]
pub enum WinInfo {
    /// The row with the given index.
    Row(usize),
    /// The column with the given index.
    Column(usize),
    /// (0,0), (1,1), (2,2).
    MainDiagonal,
    /// (0,2), (1,1), (2,0).
    AntiDiagonal,
}

impl WinInfo {
    /// All eight lines: rows, then columns, then the two diagonals.
    pub const ALL: [WinInfo; 8] = [
        WinInfo::Row(0),
        WinInfo::Row(1),
        WinInfo::Row(2),
        WinInfo::Column(0),
        WinInfo::Column(1),
        WinInfo::Column(2),
        WinInfo::MainDiagonal,
        WinInfo::AntiDiagonal,
    ];

    /// Returns the kind of line.
    pub fn kind(self) -> WinKind {
        match self {
            WinInfo::Row(_) => WinKind::Row,
            WinInfo::Column(_) => WinKind::Column,
            WinInfo::MainDiagonal => WinKind::MainDiagonal,
            WinInfo::AntiDiagonal => WinKind::AntiDiagonal,
        }
    }

    /// Returns the row or column index; `None` for diagonals.
    pub fn index(self) -> Option<usize> {
        match self {
            WinInfo::Row(index) | WinInfo::Column(index) => Some(index),
            WinInfo::MainDiagonal | WinInfo::AntiDiagonal => None,
        }
    }

    /// The three cells making up this line.
    ///
    /// Returns `None` for a row or column index outside 0-2.
    pub fn cells(self) -> Option<[Cell; 3]> {
        let coords = match self {
            WinInfo::Row(r) => [(r, 0), (r, 1), (r, 2)],
            WinInfo::Column(c) => [(0, c), (1, c), (2, c)],
            WinInfo::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            WinInfo::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        };
        let [a, b, c] = coords;
        Some([
            Cell::new(a.0, a.1).ok()?,
            Cell::new(b.0, b.1).ok()?,
            Cell::new(c.0, c.1).ok()?,
        ])
    }

    /// Checks whether every cell of the line holds the player's mark.
    pub fn is_owned_by(self, board: &Board, player: Player) -> bool {
        self.cells().is_some_and(|cells| {
            cells
                .iter()
                .all(|cell| board.get(*cell) == Square::Occupied(player))
        })
    }
}

/// Unchecked wire form of [`WinInfo`].
#[derive(Deserialize)]
enum RawWinInfo {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl TryFrom<RawWinInfo> for WinInfo {
    type Error = EngineError;

    fn try_from(raw: RawWinInfo) -> Result<Self, Self::Error> {
        let checked = |index: usize| {
            if index < BOARD_SIZE {
                Ok(index)
            } else {
                Err(EngineError::LineOutOfBounds { index })
            }
        };
        match raw {
            RawWinInfo::Row(index) => checked(index).map(WinInfo::Row),
            RawWinInfo::Column(index) => checked(index).map(WinInfo::Column),
            RawWinInfo::MainDiagonal => Ok(WinInfo::MainDiagonal),
            RawWinInfo::AntiDiagonal => Ok(WinInfo::AntiDiagonal),
        }
    }
}

impl std::fmt::Display for WinInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinInfo::Row(index) => write!(f, "row {}", index),
            WinInfo::Column(index) => write!(f, "column {}", index),
            WinInfo::MainDiagonal => write!(f, "main diagonal"),
            WinInfo::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Lines passing through a cell, in tie-break order.
///
/// Row and column always; each diagonal only if the cell lies on it.
pub fn candidate_lines(cell: Cell) -> impl Iterator<Item = WinInfo> {
    [
        Some(WinInfo::Row(cell.row())),
        Some(WinInfo::Column(cell.column())),
        cell.is_on_main_diagonal().then_some(WinInfo::MainDiagonal),
        cell.is_on_anti_diagonal().then_some(WinInfo::AntiDiagonal),
    ]
    .into_iter()
    .flatten()
}

/// Finds the first line through `cell` completed by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, cell: Cell, player: Player) -> Option<WinInfo> {
    candidate_lines(cell).find(|line| line.is_owned_by(board, player))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Scans all eight lines for a winner, first in [`WinInfo::ALL`] order.
    pub(crate) fn check_winner(board: &Board) -> Option<(Player, WinInfo)> {
        WinInfo::ALL.into_iter().find_map(|line| {
            let [first, ..] = line.cells()?;
            let player = board.get(first).player()?;
            line.is_owned_by(board, player).then_some((player, line))
        })
    }

    fn board_with(player: Player, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in indices {
            let cell = Cell::from_index(index).unwrap();
            board.set(cell, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&board), Some((Player::X, WinInfo::Row(0))));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(Player::O, &[2, 4, 6]);
        assert_eq!(
            check_winner(&board),
            Some((Player::O, WinInfo::AntiDiagonal))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[0, 1]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_candidate_lines_corner() {
        let lines: Vec<_> = candidate_lines(Cell::ALL[0]).collect();
        assert_eq!(
            lines,
            vec![WinInfo::Row(0), WinInfo::Column(0), WinInfo::MainDiagonal]
        );
    }

    #[test]
    fn test_candidate_lines_center_has_all_four() {
        let lines: Vec<_> = candidate_lines(Cell::CENTER).collect();
        assert_eq!(
            lines,
            vec![
                WinInfo::Row(1),
                WinInfo::Column(1),
                WinInfo::MainDiagonal,
                WinInfo::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_candidate_lines_edge_skips_diagonals() {
        let lines: Vec<_> = candidate_lines(Cell::ALL[3]).collect();
        assert_eq!(lines, vec![WinInfo::Row(1), WinInfo::Column(0)]);
    }

    #[test]
    fn test_winning_line_prefers_row_over_column() {
        // Corrupted board: X owns both row 0 and column 0.
        let board = board_with(Player::X, &[0, 1, 2, 3, 6]);
        assert_eq!(
            winning_line(&board, Cell::ALL[0], Player::X),
            Some(WinInfo::Row(0))
        );
    }

    #[test]
    fn test_winning_line_ignores_other_player() {
        let board = board_with(Player::O, &[0, 1, 2]);
        assert_eq!(winning_line(&board, Cell::ALL[1], Player::X), None);
    }

    #[test]
    fn test_win_info_accessors() {
        assert_eq!(WinInfo::Column(2).kind(), WinKind::Column);
        assert_eq!(WinInfo::Column(2).index(), Some(2));
        assert_eq!(WinInfo::MainDiagonal.index(), None);
        assert_eq!(WinInfo::Row(3).cells(), None);
        assert_eq!(
            WinInfo::AntiDiagonal.cells().map(|cells| cells.map(Cell::index)),
            Some([2, 4, 6])
        );
    }

    #[test]
    fn test_win_info_deserialize_rejects_off_board_index() {
        let parsed: WinInfo = serde_json::from_str(r#"{"Column":2}"#).unwrap();
        assert_eq!(parsed, WinInfo::Column(2));
        let diagonal: WinInfo = serde_json::from_str(r#""AntiDiagonal""#).unwrap();
        assert_eq!(diagonal, WinInfo::AntiDiagonal);

        let err = serde_json::from_str::<WinInfo>(r#"{"Row":7}"#).unwrap_err();
        assert!(err.to_string().contains("Line index 7 is outside the 3x3 board"));
        assert!(serde_json::from_str::<WinInfo>(r#"{"Column":3}"#).is_err());
    }
}
