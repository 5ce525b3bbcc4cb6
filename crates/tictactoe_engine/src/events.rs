//! Notifications emitted by the engine and the observers that receive them.
//!
//! Observers are called synchronously, in registration order, before the
//! triggering command returns. Each one gets a shared borrow of the
//! engine's [`GameState`], so it can render from it but cannot issue
//! commands back into the engine mid-dispatch.

use super::error::ObserverError;
use super::outcome::GameResult;
use super::types::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A notification emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted at the given cell.
    MoveMade {
        /// Row of the marked cell.
        row: usize,
        /// Column of the marked cell.
        column: usize,
    },
    /// The game transitioned to over.
    GameEnded(GameResult),
    /// The engine was reset.
    GameRestarted,
}

/// Receives engine notifications.
///
/// Every method defaults to doing nothing, so implementors only override
/// what they care about. Returning an error stops dispatch and surfaces
/// the error from the command that triggered it.
pub trait GameObserver {
    /// Called after every accepted move, once the state reflects it.
    fn on_move_made(
        &mut self,
        _state: &GameState,
        _row: usize,
        _column: usize,
    ) -> Result<(), ObserverError> {
        Ok(())
    }

    /// Called once per game, when a move wins or draws it.
    fn on_game_ended(
        &mut self,
        _state: &GameState,
        _result: &GameResult,
    ) -> Result<(), ObserverError> {
        Ok(())
    }

    /// Called on every reset.
    fn on_game_restarted(&mut self, _state: &GameState) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// Adapts a closure over [`GameEvent`] into a [`GameObserver`].
pub struct FnObserver<F> {
    handler: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(&GameEvent, &GameState) -> Result<(), ObserverError>,
{
    /// Wraps the closure.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> GameObserver for FnObserver<F>
where
    F: FnMut(&GameEvent, &GameState) -> Result<(), ObserverError>,
{
    fn on_move_made(
        &mut self,
        state: &GameState,
        row: usize,
        column: usize,
    ) -> Result<(), ObserverError> {
        (self.handler)(&GameEvent::MoveMade { row, column }, state)
    }

    fn on_game_ended(
        &mut self,
        state: &GameState,
        result: &GameResult,
    ) -> Result<(), ObserverError> {
        (self.handler)(&GameEvent::GameEnded(*result), state)
    }

    fn on_game_restarted(&mut self, state: &GameState) -> Result<(), ObserverError> {
        (self.handler)(&GameEvent::GameRestarted, state)
    }
}

/// Handle returned by subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Registered observers in registration order.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn GameObserver>)>,
}

impl ObserverList {
    /// Appends an observer and returns its handle.
    pub(crate) fn push(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Removes an observer; false if the handle is unknown.
    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered observers.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Delivers an event to every observer, stopping at the first error.
    #[instrument(skip(self, state))]
    pub(crate) fn dispatch(
        &mut self,
        state: &GameState,
        event: &GameEvent,
    ) -> Result<(), ObserverError> {
        debug!(observers = self.entries.len(), "Dispatching event");
        for (id, observer) in &mut self.entries {
            let delivered = match event {
                GameEvent::MoveMade { row, column } => observer.on_move_made(state, *row, *column),
                GameEvent::GameEnded(result) => observer.on_game_ended(state, result),
                GameEvent::GameRestarted => observer.on_game_restarted(state),
            };
            if let Err(err) = delivered {
                warn!(observer = ?id, error = %err, "Observer failed, aborting dispatch");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("next_id", &self.next_id)
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<(u8, GameEvent)>>>, tag: u8) -> Box<dyn GameObserver> {
        let log = Rc::clone(log);
        Box::new(FnObserver::new(move |event: &GameEvent, _: &GameState| {
            log.borrow_mut().push((tag, *event));
            Ok(())
        }))
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::default();
        list.push(recorder(&log, 1));
        list.push(recorder(&log, 2));

        list.dispatch(&GameState::new(), &GameEvent::GameRestarted)
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![(1, GameEvent::GameRestarted), (2, GameEvent::GameRestarted)]
        );
    }

    #[test]
    fn test_remove_unknown_id() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::default();
        let id = list.push(recorder(&log, 1));

        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_error_stops_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::default();
        list.push(Box::new(FnObserver::new(|_: &GameEvent, _: &GameState| {
            Err(ObserverError::new("render failed"))
        })));
        list.push(recorder(&log, 2));

        let err = list
            .dispatch(&GameState::new(), &GameEvent::GameRestarted)
            .unwrap_err();

        assert_eq!(err.message, "render failed");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_default_methods_are_no_ops() {
        struct Silent;
        impl GameObserver for Silent {}

        let mut list = ObserverList::default();
        list.push(Box::new(Silent));
        let state = GameState::new();

        assert!(
            list.dispatch(&state, &GameEvent::MoveMade { row: 0, column: 0 })
                .is_ok()
        );
        assert!(
            list.dispatch(&state, &GameEvent::GameEnded(GameResult::Draw))
                .is_ok()
        );
    }
}
