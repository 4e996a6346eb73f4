//! The display state machine.
//!
//! An [`EngineState`] is a plain value: every key produces the next state
//! from the current one, so callers can keep old states around for undo or
//! compare them in tests.

use serde::Serialize;

use super::key::{Key, Operator};
use crate::calculator::{
    ERROR_TEXT, INITIAL_DISPLAY, current_numeric_segment, ends_in_operator, evaluate,
    format_result, is_complete_binary, is_error, is_fresh, is_lone_sign, is_valid_display,
};

/// Label of the clear key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClearLabel {
    /// All clear: the display is already fresh.
    #[serde(rename = "AC")]
    AllClear,
    /// Clear entry: there is something to clear.
    #[serde(rename = "C")]
    ClearEntry,
}

impl ClearLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::ClearEntry => "C",
        }
    }
}

/// Calculator state: the display text and whether it holds a fresh result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineState {
    display: String,
    just_evaluated: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            just_evaluated: false,
        }
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True only right after a successful `=`.
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Check if the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        is_error(&self.display)
    }

    /// `AC` exactly when the display is `"0"`, otherwise `C`.
    pub fn clear_button_label(&self) -> ClearLabel {
        if self.display == INITIAL_DISPLAY {
            ClearLabel::AllClear
        } else {
            ClearLabel::ClearEntry
        }
    }

    /// Produce the state that follows `key`.
    pub fn handle(mut self, key: Key) -> Self {
        self.apply(key);
        self
    }

    /// Apply `key` in place.
    pub fn apply(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.push_digit(d),
            Key::Decimal => self.push_decimal(),
            Key::Operator(op) => self.push_operator(op),
            Key::Equals => self.equals(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
        }

        if !is_valid_display(&self.display) {
            tracing::debug!(display = %self.display, "normalizing invalid display");
            self.reset();
        }

        tracing::trace!(
            %key,
            display = %self.display,
            just_evaluated = self.just_evaluated,
            "key handled"
        );
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_display(&mut self, display: impl Into<String>) {
        self.display = display.into();
    }

    fn push_digit(&mut self, digit: u8) {
        // Out-of-range payloads clamp to 9.
        let ch = char::from(b'0' + digit.min(9));

        if self.just_evaluated || is_fresh(&self.display) {
            self.set_display(ch);
        } else {
            self.display.push(ch);
        }
        self.just_evaluated = false;
    }

    fn push_decimal(&mut self) {
        if self.just_evaluated || is_fresh(&self.display) {
            self.set_display("0.");
        } else if ends_in_operator(&self.display) {
            self.display.push_str("0.");
        } else if !current_numeric_segment(&self.display).contains('.') {
            self.display.push('.');
        }
        self.just_evaluated = false;
    }

    fn push_operator(&mut self, op: Operator) {
        if self.just_evaluated {
            if self.is_error() {
                self.reset();
            } else {
                self.display.push(op.symbol());
            }
        } else if is_fresh(&self.display) {
            if op.is_sign() {
                self.set_display(op.symbol());
            }
        } else if is_lone_sign(&self.display) {
            // Only a sign may replace a lone leading sign, so the display
            // never starts with ×, ÷ or %.
            if op.is_sign() {
                self.set_display(op.symbol());
            }
        } else if ends_in_operator(&self.display) {
            self.display.pop();
            self.display.push(op.symbol());
        } else if is_complete_binary(&self.display) {
            match evaluate(&self.display) {
                Ok(value) => {
                    let mut next = format_result(value);
                    next.push(op.symbol());
                    self.set_display(next);
                }
                Err(err) => {
                    tracing::debug!(
                        expression = %self.display,
                        %err,
                        "chained evaluation failed"
                    );
                    self.set_display(ERROR_TEXT);
                }
            }
        } else {
            self.display.push(op.symbol());
        }
        self.just_evaluated = false;
    }

    fn equals(&mut self) {
        if !is_complete_binary(&self.display) {
            return;
        }

        match evaluate(&self.display) {
            Ok(value) => {
                self.set_display(format_result(value));
                self.just_evaluated = true;
            }
            Err(err) => {
                tracing::debug!(expression = %self.display, %err, "evaluation failed");
                self.set_display(ERROR_TEXT);
                self.just_evaluated = false;
            }
        }
    }

    fn backspace(&mut self) {
        self.just_evaluated = false;

        if is_fresh(&self.display) {
            self.reset();
            return;
        }

        self.display.pop();
        if self.display.is_empty() || is_lone_sign(&self.display) {
            self.reset();
        }
    }

    fn clear(&mut self) {
        match self.clear_button_label() {
            ClearLabel::AllClear => self.reset(),
            ClearLabel::ClearEntry => {
                self.set_display(INITIAL_DISPLAY);
                self.just_evaluated = false;
            }
        }
    }
}
