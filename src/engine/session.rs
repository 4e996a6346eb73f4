//! A calculator session with undo history.

use std::collections::VecDeque;

use super::key::Key;
use super::state::{ClearLabel, EngineState};

/// Default number of retained undo steps.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Owns the live [`EngineState`] plus the states it replaced.
#[derive(Clone, Debug)]
pub struct Calculator {
    state: EngineState,
    undo: VecDeque<EngineState>,
    redo: Vec<EngineState>,
    history_limit: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl Calculator {
    /// Create a session that keeps at most `history_limit` undo steps.
    pub fn new(history_limit: usize) -> Self {
        Self {
            state: EngineState::default(),
            undo: VecDeque::new(),
            redo: Vec::new(),
            history_limit,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Apply one key.
    ///
    /// An all-clear also forgets the undo history; a clear-entry keeps it.
    pub fn press(&mut self, key: Key) {
        let all_clear =
            key == Key::Clear && self.state.clear_button_label() == ClearLabel::AllClear;

        let previous = self.state.clone();
        self.state.apply(key);

        if all_clear {
            self.undo.clear();
            self.redo.clear();
            return;
        }

        if self.state != previous {
            self.remember(previous);
            self.redo.clear();
        }
    }

    /// Apply a sequence of keys in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    /// Step back to the previous state. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.state, previous);
        self.redo.push(current);
        true
    }

    /// Re-apply the most recently undone state. Returns `false` when there
    /// is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.state, next);
        self.remember(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn remember(&mut self, state: EngineState) {
        if self.history_limit == 0 {
            return;
        }
        if self.undo.len() == self.history_limit {
            self.undo.pop_front();
        }
        self.undo.push_back(state);
    }
}
