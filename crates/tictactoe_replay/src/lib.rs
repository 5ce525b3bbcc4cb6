//! Headless replay driver for the tic-tac-toe engine.
//!
//! Reads a TOML script of moves and resets, feeds it to a
//! [`GameEngine`](tictactoe_engine::GameEngine) and narrates every
//! notification as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod runner;
mod script;
mod transcript;

pub use config::{ConfigError, ReplayConfig};
pub use runner::{Transcript, run_script};
pub use script::{ReplayScript, ReplayStep, ScriptError};
pub use transcript::{TranscriptLines, TranscriptObserver};
