//! Results of engine commands.

use super::rules::WinInfo;
use super::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Terminal outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinInfo,
    },
    /// The board filled up with no line completed.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Won { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn win_info(&self) -> Option<WinInfo> {
        match self {
            GameResult::Won { line, .. } => Some(*line),
            GameResult::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won { winner, line } => write!(f, "Player {} wins ({})", winner, line),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Cell),

    /// The game has ended; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,
}

/// What [`GameEngine::apply_move`](crate::GameEngine::apply_move) did.
///
/// Callers are free to drop this; an ignored move changes nothing and
/// notifies nobody either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was a no-op.
    Ignored(Rejection),
    /// The mark was placed and play passes to the other player.
    Placed {
        /// The player whose mark was placed.
        player: Player,
        /// Where it was placed.
        cell: Cell,
    },
    /// The mark was placed and ended the game.
    Finished(GameResult),
}

impl MoveOutcome {
    /// True unless the move was ignored.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}
