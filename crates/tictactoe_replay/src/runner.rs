//! Drives the engine through a script.

use super::config::ReplayConfig;
use super::script::{ReplayScript, ReplayStep};
use super::transcript::{TranscriptLines, TranscriptObserver};
use anyhow::{Context, Result};
use std::rc::Rc;
use tictactoe_engine::{GameEngine, GameState, MoveOutcome};
use tracing::{info, instrument, warn};

/// What a replay produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Narration lines, in the order notifications arrived.
    pub lines: Vec<String>,
    /// Engine state after the last step.
    pub final_state: GameState,
}

/// Issues every step to a fresh engine and collects the narration.
///
/// Ignored moves are noted in the transcript and the run continues.
/// Off-board coordinates stop the run with an error naming the step.
#[instrument(skip_all, fields(steps = script.steps.len()))]
pub fn run_script(script: &ReplayScript, config: &ReplayConfig) -> Result<Transcript> {
    let lines = TranscriptLines::default();
    let mut engine = GameEngine::new();
    engine.subscribe(TranscriptObserver::new(
        Rc::clone(&lines),
        *config.show_board(),
    ));

    for (number, step) in script.steps.iter().enumerate() {
        let number = number + 1;
        match *step {
            ReplayStep::Move { row, column } => {
                let outcome = engine
                    .apply_move(row, column)
                    .with_context(|| format!("step {} ({}) failed", number, step))?;
                if let MoveOutcome::Ignored(rejection) = outcome {
                    warn!(number, %rejection, "Move ignored");
                    lines
                        .borrow_mut()
                        .push(format!("Ignored {}: {}", step, rejection));
                }
            }
            ReplayStep::Reset => {
                engine
                    .reset()
                    .with_context(|| format!("step {} ({}) failed", number, step))?;
            }
        }
    }

    info!(
        turns = engine.turns_passed(),
        game_over = engine.is_game_over(),
        "Replay finished"
    );

    let lines = lines.borrow().clone();
    Ok(Transcript {
        lines,
        final_state: engine.state().clone(),
    })
}
