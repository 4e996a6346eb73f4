//! Keypad-driven calculator engine.
//!
//! This module provides:
//! - The [`Key`] and [`Operator`] input vocabulary
//! - The pure [`EngineState`] transition function
//! - A [`Calculator`] session with undo/redo

mod key;
mod session;
mod state;

pub use key::{Key, Operator};
pub use session::{Calculator, DEFAULT_HISTORY_LIMIT};
pub use state::{ClearLabel, EngineState};
