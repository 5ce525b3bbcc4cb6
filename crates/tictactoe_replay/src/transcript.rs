//! Text rendering of engine notifications.

use derive_new::new;
use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_engine::{Cell, GameObserver, GameResult, GameState, ObserverError};
use tracing::instrument;

/// Lines written so far, shared between the observer and its owner.
pub type TranscriptLines = Rc<RefCell<Vec<String>>>;

/// Observer that narrates the game the way a board view would redraw it.
///
/// On a move it reads the placed mark back from the state, draws the
/// board and announces whose turn is next; on game end it describes
/// the winning line.
#[derive(Debug, new)]
pub struct TranscriptObserver {
    lines: TranscriptLines,
    show_board: bool,
}

impl TranscriptObserver {
    fn write(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}

impl GameObserver for TranscriptObserver {
    #[instrument(skip(self, state))]
    fn on_move_made(
        &mut self,
        state: &GameState,
        row: usize,
        column: usize,
    ) -> Result<(), ObserverError> {
        let cell = Cell::new(row, column).map_err(|e| ObserverError::new(e.to_string()))?;
        let mark = state
            .board()
            .get(cell)
            .player()
            .ok_or_else(|| ObserverError::new(format!("{} was reported but is empty", cell)))?;

        self.write(format!("{} -> {}", mark, cell));
        if self.show_board {
            self.write(state.board().display());
        }
        if !state.is_game_over() {
            self.write(format!("Next: {}", state.current_player()));
        }
        Ok(())
    }

    #[instrument(skip(self, _state))]
    fn on_game_ended(
        &mut self,
        _state: &GameState,
        result: &GameResult,
    ) -> Result<(), ObserverError> {
        let line = match result.win_info().and_then(|line| line.cells()) {
            Some(cells) => format!(
                "Game over: {} [{}]",
                result,
                cells.map(|c| c.label()).join(", ")
            ),
            None => format!("Game over: {}", result),
        };
        self.write(line);
        Ok(())
    }

    #[instrument(skip(self, state))]
    fn on_game_restarted(&mut self, state: &GameState) -> Result<(), ObserverError> {
        self.write(format!("Game restarted, {} to move", state.current_player()));
        Ok(())
    }
}
