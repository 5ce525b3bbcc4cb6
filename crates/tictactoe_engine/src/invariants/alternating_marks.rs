//! Alternating marks invariant: X and O take turns, X first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate, starting with X.
///
/// X has either as many marks as O or exactly one more. While the game
/// runs, the player to move is the one with fewer marks (X on a tie).
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if state.is_game_over() {
            return true;
        }

        let expected = if x_count == o_count {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
