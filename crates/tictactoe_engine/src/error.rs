//! Engine error types.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Failure raised by an observer while handling a notification.
///
/// Observers return this to abort dispatch; the engine hands it back to
/// whoever issued the command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Observer error: {} at {}:{}", message, file, line)]
pub struct ObserverError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ObserverError {
    /// Creates a new observer error with caller location tracking.
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

/// Errors returned by [`GameEngine`](crate::GameEngine) commands.
///
/// Occupied cells and moves after game over are not errors; those come
/// back as [`MoveOutcome::Ignored`](crate::MoveOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The coordinates do not name a cell on the 3x3 board.
    #[display("Cell ({}, {}) is outside the 3x3 board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A row or column index outside 0-2 named a winning line.
    #[display("Line index {} is outside the 3x3 board", index)]
    LineOutOfBounds {
        /// Requested row or column index.
        index: usize,
    },

    /// An observer failed while a notification was being dispatched.
    #[display("{}", _0)]
    #[from]
    Observer(ObserverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notify(fail: bool) -> Result<(), ObserverError> {
        if fail {
            Err(ObserverError::new("listener gone"))
        } else {
            Ok(())
        }
    }

    fn dispatch(fail: bool) -> Result<(), EngineError> {
        notify(fail)?;
        Ok(())
    }

    #[test]
    fn test_observer_error_converts_with_question_mark() {
        assert_eq!(dispatch(false), Ok(()));
        match dispatch(true) {
            Err(EngineError::Observer(inner)) => {
                assert_eq!(inner.message, "listener gone");
                assert!(inner.file.ends_with("error.rs"));
            }
            other => panic!("expected observer error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::OutOfBounds { row: 3, column: 0 }.to_string(),
            "Cell (3, 0) is outside the 3x3 board"
        );
        assert_eq!(
            EngineError::LineOutOfBounds { index: 7 }.to_string(),
            "Line index 7 is outside the 3x3 board"
        );
    }
}
