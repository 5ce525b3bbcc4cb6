//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Replay a scripted tic-tac-toe game and print what the engine reports.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Replay a scripted tic-tac-toe game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the replay configuration file
    #[arg(short, long, default_value = "replay.toml")]
    pub config: PathBuf,

    /// Path to the script of moves and resets
    pub script: PathBuf,
}
