//! Calculator module for evaluating display expressions.
//!
//! This module provides functionality to:
//! - Classify the display text (fresh, trailing operator, numeric segment)
//! - Evaluate two-tier arithmetic expressions
//! - Format results for the display

mod detection;
mod evaluation;

pub use detection::{
    INITIAL_DISPLAY, OPERATOR_CHARS, current_numeric_segment, ends_in_operator,
    is_complete_binary, is_error, is_fresh, is_lone_sign, is_valid_display,
};
pub use evaluation::{
    DISPLAY_PRECISION, ERROR_TEXT, EVAL_PRECISION, EvalError, evaluate, format_result,
};
