//! Scripted command sequences for the replay driver.
//!
//! A script is a TOML file holding an ordered `[[step]]` array:
//!
//! ```toml
//! [[step]]
//! action = "move"
//! row = 0
//! column = 0
//!
//! [[step]]
//! action = "reset"
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One command for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Issue a move at the given coordinates.
    Move {
        /// Target row.
        row: usize,
        /// Target column.
        column: usize,
    },
    /// Issue a reset.
    Reset,
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayStep::Move { row, column } => write!(f, "move ({}, {})", row, column),
            ReplayStep::Reset => write!(f, "reset"),
        }
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Steps in the order they are issued.
    #[serde(default, rename = "step")]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(steps = script.steps.len(), "Script parsed");
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;
        let script = Self::parse(&content)?;
        info!(steps = script.steps.len(), "Script loaded");
        Ok(script)
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
