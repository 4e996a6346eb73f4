//! Display-string classification for the calculator engine.
//!
//! The state machine never inspects the display text directly. It asks
//! these predicates instead, so the branching logic does not depend on how
//! the expression is spelled out.

use lazy_static::lazy_static;
use regex::Regex;

use super::evaluation::ERROR_TEXT;

/// The display text of a fresh calculator.
pub const INITIAL_DISPLAY: &str = "0";

lazy_static! {
    /// A complete `number operator number` expression, each operand with an
    /// optional sign. Accepts the `21.` and `.5` operand forms.
    static ref COMPLETE_BINARY: Regex = Regex::new(
        r"^[+-]?(?:\d*\.\d+|\d+\.?\d*)[+\-×÷%][+-]?(?:\d*\.\d+|\d+\.?\d*)$"
    ).unwrap();

    /// Characters a display may be built from.
    static ref DISPLAY_CHARS: Regex = Regex::new(
        r"^[\d\.\+\-×÷%]+$"
    ).unwrap();
}

/// Characters that act as binary operators on the display.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '×', '÷', '%'];

/// Check if the display holds no expression in progress.
///
/// True for the initial `"0"`, an empty string and the error sentinel.
pub fn is_fresh(display: &str) -> bool {
    display.is_empty() || display == INITIAL_DISPLAY || display == ERROR_TEXT
}

/// Check if the display is the error sentinel.
pub fn is_error(display: &str) -> bool {
    display == ERROR_TEXT
}

/// Check if the last character is an operator.
pub fn ends_in_operator(display: &str) -> bool {
    display.ends_with(OPERATOR_CHARS)
}

/// Check if the display is exactly a lone `+` or `-` sign.
pub fn is_lone_sign(display: &str) -> bool {
    display == "+" || display == "-"
}

/// The trailing run of digits and decimal points after the last operator,
/// or the whole display when it has no operator.
pub fn current_numeric_segment(display: &str) -> &str {
    match display.rfind(OPERATOR_CHARS) {
        Some(idx) => {
            let op_len = display[idx..].chars().next().map_or(1, char::len_utf8);
            &display[idx + op_len..]
        }
        None => display,
    }
}

/// Check if the display is a complete two-operand expression such as
/// `12+8` or `-3×.5`.
pub fn is_complete_binary(display: &str) -> bool {
    COMPLETE_BINARY.is_match(display)
}

/// Check if the display is something the state machine can continue from:
/// the error sentinel, or a non-empty run of digits, points and operators.
pub fn is_valid_display(display: &str) -> bool {
    is_error(display) || DISPLAY_CHARS.is_match(display)
}
