//! Discrete keypad input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator as shown on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// The character this operator occupies on the display.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Modulo => '%',
        }
    }

    /// Look up an operator by its display character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Check if this operator binds tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide | Self::Modulo)
    }

    /// Check if this operator may stand as a leading sign.
    pub fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One user action on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Key {
    /// A digit 0-9.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl Key {
    /// Create a digit key. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => write!(f, "."),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Equals => write!(f, "="),
            Self::Backspace => write!(f, "⌫"),
            Self::Clear => write!(f, "C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('*'), None);
        assert_eq!(Operator::from_symbol('/'), None);
    }

    #[test]
    fn test_tiers() {
        assert!(Operator::Multiply.is_multiplicative());
        assert!(Operator::Divide.is_multiplicative());
        assert!(Operator::Modulo.is_multiplicative());
        assert!(!Operator::Add.is_multiplicative());
        assert!(Operator::Subtract.is_sign());
        assert!(!Operator::Modulo.is_sign());
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Key::digit(7), Some(Key::Digit(7)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&Key::Operator(Operator::Divide)).unwrap();
        assert_eq!(json, r#"{"kind":"operator","value":"divide"}"#);

        let key: Key = serde_json::from_str(r#"{"kind":"digit","value":4}"#).unwrap();
        assert_eq!(key, Key::Digit(4));

        let key: Key = serde_json::from_str(r#"{"kind":"equals"}"#).unwrap();
        assert_eq!(key, Key::Equals);
    }
}
