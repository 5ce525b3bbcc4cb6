//! The tic-tac-toe game engine.

use super::Cell;
use super::error::{EngineError, ObserverError};
use super::events::{FnObserver, GameEvent, GameObserver, ObserverId, ObserverList};
use super::invariants;
use super::outcome::{GameResult, MoveOutcome, Rejection};
use super::rules;
use super::types::{Board, GameState, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the game state and the observer list. Commands run to completion
/// and notify observers inline before returning.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: GameState,
    observers: ObserverList,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the number of moves since the last reset.
    pub fn turns_passed(&self) -> u8 {
        self.state.turns_passed()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns the square at the given coordinates.
    pub fn square(&self, row: usize, column: usize) -> Result<Square, EngineError> {
        Ok(self.state.board().get(Cell::new(row, column)?))
    }

    /// Registers an observer; it is notified after those registered before it.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = self.observers.push(Box::new(observer));
        debug!(?id, observers = self.observers.len(), "Observer subscribed");
        id
    }

    /// Registers a closure that receives every [`GameEvent`].
    pub fn subscribe_fn<F>(&mut self, handler: F) -> ObserverId
    where
        F: FnMut(&GameEvent, &GameState) -> Result<(), ObserverError> + 'static,
    {
        self.subscribe(FnObserver::new(handler))
    }

    /// Removes an observer. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Places the current player's mark at `(row, column)`.
    ///
    /// A move onto an occupied cell, or any move once the game is over,
    /// is ignored: nothing changes and nobody is notified. Otherwise the
    /// mark is placed, the game-ended notification fires if this move won
    /// or drew, and the move-made notification fires last.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for coordinates off the board,
    /// before anything changes. Returns [`EngineError::Observer`] if an
    /// observer fails; the move itself has already been applied by then.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome, EngineError> {
        let cell = Cell::new(row, column)?;

        if let Some(rejection) = self.rejection(cell) {
            debug!(%rejection, "Move ignored");
            return Ok(MoveOutcome::Ignored(rejection));
        }

        let player = self.state.current_player();
        self.state.place(cell, player);

        let outcome = match self.evaluate(cell, player) {
            Some(result) => {
                self.state.finish();
                info!(%result, turns = self.state.turns_passed(), "Game ended");
                MoveOutcome::Finished(result)
            }
            None => {
                self.state.switch_player();
                debug!(%cell, next = ?self.state.current_player(), "Move placed");
                MoveOutcome::Placed { player, cell }
            }
        };

        invariants::audit(&self.state);

        if let MoveOutcome::Finished(result) = outcome {
            self.observers
                .dispatch(&self.state, &GameEvent::GameEnded(result))?;
        }
        self.observers
            .dispatch(&self.state, &GameEvent::MoveMade { row, column })?;

        Ok(outcome)
    }

    /// Clears the board and hands the first move back to X.
    ///
    /// Always notifies observers, even if nothing had been played.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Observer`] if an observer fails; the state
    /// has already been reset by then.
    #[instrument(skip(self), fields(turns = self.state.turns_passed()))]
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.state = GameState::new();
        info!("Game restarted");
        self.observers
            .dispatch(&self.state, &GameEvent::GameRestarted)?;
        Ok(())
    }

    /// Why a move at `cell` would be ignored, if it would.
    fn rejection(&self, cell: Cell) -> Option<Rejection> {
        if self.state.is_game_over() {
            Some(Rejection::GameOver)
        } else if !self.state.board().is_empty(cell) {
            Some(Rejection::Occupied(cell))
        } else {
            None
        }
    }

    /// Decides whether the mark just placed at `cell` ended the game.
    fn evaluate(&self, cell: Cell, player: Player) -> Option<GameResult> {
        if let Some(line) = rules::winning_line(self.state.board(), cell, player) {
            Some(GameResult::Won {
                winner: player,
                line,
            })
        } else if rules::is_final_turn(self.state.turns_passed()) {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WinInfo;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> MoveOutcome {
        let mut last = None;
        for &(row, column) in moves {
            last = Some(engine.apply_move(row, column).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_first_move_places_x() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_move(1, 1).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                player: Player::X,
                cell: Cell::CENTER
            }
        );
        assert_eq!(engine.square(1, 1), Ok(Square::Occupied(Player::X)));
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.turns_passed(), 1);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = GameEngine::new();
        engine.apply_move(0, 0).unwrap();
        let before = engine.state().clone();

        let outcome = engine.apply_move(0, 0).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Ignored(Rejection::Occupied(Cell::ALL[0]))
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_column_win() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[(0, 2), (0, 0), (1, 2), (1, 1), (2, 2)]);

        assert_eq!(
            outcome,
            MoveOutcome::Finished(GameResult::Won {
                winner: Player::X,
                line: WinInfo::Column(2)
            })
        );
        assert!(engine.is_game_over());
        // The winner stays current; there is no next turn.
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_o_can_win_anti_diagonal() {
        let mut engine = GameEngine::new();
        let outcome = play(
            &mut engine,
            &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)],
        );

        assert_eq!(
            outcome,
            MoveOutcome::Finished(GameResult::Won {
                winner: Player::O,
                line: WinInfo::AntiDiagonal
            })
        );
    }

    #[test]
    fn test_out_of_bounds_leaves_state() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_move(3, 1),
            Err(EngineError::OutOfBounds { row: 3, column: 1 })
        );
        assert_eq!(engine.state(), &GameState::new());
        assert!(engine.square(0, 3).is_err());
    }

    #[test]
    fn test_reset_from_fresh_engine() {
        let mut engine = GameEngine::new();
        engine.reset().unwrap();
        assert_eq!(engine.state(), &GameState::new());
    }
}
