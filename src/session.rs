//! A running calculator session.
//!
//! Holds the single live state snapshot. Every dispatched action replaces
//! it wholesale; nothing mutates a snapshot in place.

use crate::calculator::CalculatorState;
use crate::items::{ButtonItem, Readout, keypad};
use crate::keymap::{Action, action_for_key};

#[derive(Debug, Default)]
pub struct Session {
    state: CalculatorState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply an action and install the resulting snapshot.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = self.state.apply(action);
        tracing::debug!(
            %action,
            display = next.display(),
            phase = ?next.phase(),
            "dispatched action"
        );
        self.state = next;
        &self.state
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &CalculatorState {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Handle a keyboard key. Returns `false` for keys with no binding.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        match action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => {
                tracing::trace!(key, "ignored unbound key");
                false
            }
        }
    }

    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state)
    }

    pub fn keypad(&self) -> Vec<Vec<ButtonItem>> {
        keypad(&self.state)
    }
}
