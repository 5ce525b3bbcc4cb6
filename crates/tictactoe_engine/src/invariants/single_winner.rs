//! Single winner invariant: a completed line always means game over.

use super::super::rules::WinInfo;
use super::super::{GameState, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: at most one player owns a line, and only in a finished game.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let owners = Player::iter()
            .filter(|player| {
                WinInfo::ALL
                    .iter()
                    .any(|line| line.is_owned_by(state.board(), *player))
            })
            .count();

        match owners {
            0 => true,
            1 => state.is_game_over(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "At most one player completes a line, and only in a finished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Square};

    fn give(state: &mut GameState, player: Player, indices: &[usize]) {
        for &index in indices {
            state
                .board_mut()
                .set(Cell::from_index(index).unwrap(), Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_line_holds() {
        assert!(SingleWinnerInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_line_in_running_game_violates() {
        let mut state = GameState::new();
        give(&mut state, Player::X, &[0, 1, 2]);
        assert!(!SingleWinnerInvariant::holds(&state));

        state.finish();
        assert!(SingleWinnerInvariant::holds(&state));
    }

    #[test]
    fn test_two_winners_violate() {
        let mut state = GameState::new();
        give(&mut state, Player::X, &[0, 1, 2]);
        give(&mut state, Player::O, &[6, 7, 8]);
        state.finish();
        assert!(!SingleWinnerInvariant::holds(&state));
    }
}
