//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

/// Moves it takes to fill the board.
pub const MAX_TURNS: u8 = 9;

/// Checks whether the turn count means the board has no empty cell left.
///
/// A move that reaches this count without completing a line is a draw.
#[instrument]
pub fn is_final_turn(turns_passed: u8) -> bool {
    turns_passed >= MAX_TURNS
}
