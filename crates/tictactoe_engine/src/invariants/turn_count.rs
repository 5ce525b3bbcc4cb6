//! Turn count invariant: the counter matches the marks on the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: turns passed equals the number of occupied squares.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(state: &GameState) -> bool {
        usize::from(state.turns_passed()) == state.board().occupied()
    }

    fn description() -> &'static str {
        "Turn counter equals the number of occupied squares"
    }
}
