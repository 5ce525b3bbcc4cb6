//! Tic-tac-toe game-state engine.
//!
//! The engine owns a 3x3 board, the player to move, a turn counter and a
//! game-over flag. A presentation layer drives it with two commands and
//! listens for three notifications.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine::apply_move`] and [`GameEngine::reset`]
//! - **Events**: [`GameObserver`] callbacks, delivered in registration order
//! - **Rules**: win detection through the played cell, draw on the ninth turn
//! - **Invariants**: audited after every accepted move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameEvent, Player, WinInfo};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! engine.subscribe_fn(|event, state| {
//!     if let GameEvent::GameEnded(result) = event {
//!         assert!(state.is_game_over());
//!         assert_eq!(result.win_info(), Some(WinInfo::Row(0)));
//!     }
//!     Ok(())
//! });
//!
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, column)?;
//! }
//! assert_eq!(engine.current_player(), Player::X);
//! assert!(engine.is_game_over());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod error;
mod events;
mod outcome;
mod types;

pub mod invariants;
pub mod rules;

pub use cell::{BOARD_SIZE, Cell};
pub use engine::GameEngine;
pub use error::{EngineError, ObserverError};
pub use events::{FnObserver, GameEvent, GameObserver, ObserverId};
pub use outcome::{GameResult, MoveOutcome, Rejection};
pub use rules::{WinInfo, WinKind};
pub use types::{Board, GameState, Player, Square};
