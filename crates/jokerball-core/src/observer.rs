//! Render notifications for a view layer.
//!
//! `ObservedGame` forwards inputs to a [`GameState`] and hands the registered
//! callback a fresh [`GameSnapshot`] after every transition that went through.

use crate::actions::{GameAction, GameEvent};
use crate::game::{GameError, GameSnapshot, GameState};

/// Callback receiving the game after each change
pub type Observer = Box<dyn FnMut(&GameSnapshot)>;

/// A game with a single render callback attached
pub struct ObservedGame {
    game: GameState,
    observer: Option<Observer>,
}

impl ObservedGame {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            observer: None,
        }
    }

    /// Register the callback, replacing any previous one
    pub fn register<F>(&mut self, observer: F)
    where
        F: FnMut(&GameSnapshot) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Publish the initial state
    pub fn start(&mut self) {
        self.notify();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn press_ok(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let events = self.game.press_ok()?;
        self.notify();
        Ok(events)
    }

    pub fn select_space(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        let events = self.game.select_space(index)?;
        self.notify();
        Ok(events)
    }

    /// Only notifies when a checker was actually put back
    pub fn unselect_checker(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let events = self.game.unselect_checker()?;
        if !events.is_empty() {
            self.notify();
        }
        Ok(events)
    }

    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::PressOk => self.press_ok(),
            GameAction::SelectSpace(index) => self.select_space(index),
            GameAction::UnselectChecker => self.unselect_checker(),
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.game.snapshot());
        }
    }
}
