//! Display snapshot handed to the screen adapter.

use serde::Serialize;

use crate::engine::{ClearLabel, EngineState};

/// Everything a front end needs to draw the calculator after a key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayView {
    /// The display text (`"0"`, an expression, a result or `"Error"`).
    pub text: String,
    /// Label for the clear key.
    pub clear_label: ClearLabel,
    /// Whether the display shows the error sentinel.
    pub is_error: bool,
    /// Whether the display holds a result that the next digit replaces.
    pub just_evaluated: bool,
}

impl DisplayView {
    /// Create a view from the current engine state.
    pub fn from_state(state: &EngineState) -> Self {
        Self {
            text: state.display().to_string(),
            clear_label: state.clear_button_label(),
            is_error: state.is_error(),
            just_evaluated: state.just_evaluated(),
        }
    }
}

impl From<&EngineState> for DisplayView {
    fn from(state: &EngineState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Key, Operator};

    #[test]
    fn test_fresh_view() {
        let view = DisplayView::from_state(&EngineState::new());
        assert_eq!(view.text, "0");
        assert_eq!(view.clear_label, ClearLabel::AllClear);
        assert!(!view.is_error);
    }

    #[test]
    fn test_error_view() {
        let state = [
            Key::Digit(5),
            Key::Operator(Operator::Divide),
            Key::Digit(0),
            Key::Equals,
        ]
        .into_iter()
        .fold(EngineState::new(), EngineState::handle);

        let view = DisplayView::from(&state);
        assert_eq!(view.text, "Error");
        assert_eq!(view.clear_label, ClearLabel::ClearEntry);
        assert!(view.is_error);
    }

    #[test]
    fn test_view_json() {
        let view = DisplayView::from_state(&EngineState::new());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["text"], "0");
        assert_eq!(json["clear_label"], "AC");
        assert_eq!(json["is_error"], false);
    }
}
