//! zcalc: a keypad-driven calculator engine.
//!
//! The [`engine`] consumes one [`engine::Key`] at a time and keeps a single
//! display string; the [`calculator`] module evaluates and formats the
//! expressions that string holds. Front ends talk to the engine through the
//! keypad and screen adapters in [`ui`].

pub mod calculator;
pub mod cli;
pub mod config;
pub mod engine;
pub mod run;
pub mod ui;
pub mod view;

pub use calculator::{EvalError, evaluate, format_result};
pub use engine::{Calculator, ClearLabel, EngineState, Key, Operator};
pub use view::DisplayView;
