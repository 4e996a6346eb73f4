//! Keypad adapter: turns typed tokens into [`Key`] events.
//!
//! A line of input is split on whitespace. Each word is first looked up as
//! a user alias, then as a named key (`clear`, `bs`, ...). Anything else is
//! read one character at a time, so `12+8=` is five keys.

use std::collections::HashMap;

use thiserror::Error;

use crate::engine::{Key, Operator};

/// A token that does not name any key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("alias '{alias}' maps to unknown key '{target}'")]
    BadAlias { alias: String, target: String },
}

/// Map a single character to a key. Accepts ASCII operator aliases.
pub fn key_for_char(ch: char) -> Option<Key> {
    let key = match ch {
        '0'..='9' => Key::Digit(ch as u8 - b'0'),
        '.' | ',' => Key::Decimal,
        '+' => Key::Operator(Operator::Add),
        '-' | '−' => Key::Operator(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => Key::Operator(Operator::Multiply),
        '/' | '÷' => Key::Operator(Operator::Divide),
        '%' => Key::Operator(Operator::Modulo),
        '=' => Key::Equals,
        '⌫' => Key::Backspace,
        _ => return None,
    };
    Some(key)
}

/// Map a whole word to a named key.
fn named_key(word: &str) -> Option<Key> {
    match word.to_ascii_lowercase().as_str() {
        "enter" | "equals" => Some(Key::Equals),
        "c" | "ac" | "ce" | "clear" | "esc" => Some(Key::Clear),
        "bs" | "back" | "backspace" | "del" => Some(Key::Backspace),
        _ => None,
    }
}

/// Parse one whitespace-free token into keys.
pub fn parse_token(token: &str) -> Result<Vec<Key>, KeyParseError> {
    if let Some(key) = named_key(token) {
        return Ok(vec![key]);
    }

    token
        .chars()
        .map(|ch| key_for_char(ch).ok_or_else(|| KeyParseError::UnknownKey(ch.to_string())))
        .collect()
}

/// Parse a line of whitespace-separated tokens without user aliases.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyParseError> {
    Keypad::default().parse(line)
}

/// Rewrite ASCII operator aliases into the display operators, so `12*3/4`
/// can be handed to the evaluator.
pub fn normalize_expression(expr: &str) -> String {
    expr.chars()
        .map(|ch| match key_for_char(ch) {
            Some(Key::Operator(op)) => op.symbol(),
            _ => ch,
        })
        .collect()
}

/// A keypad with user-defined aliases layered over the built-in tokens.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    aliases: HashMap<String, Vec<Key>>,
}

impl Keypad {
    /// Build a keypad from `alias -> token` pairs. Each target must itself
    /// be a built-in token; aliases do not chain.
    pub fn with_aliases<'a>(
        aliases: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<Self, KeyParseError> {
        let aliases = aliases
            .into_iter()
            .map(|(alias, target)| {
                let keys = parse_token(target).map_err(|_| KeyParseError::BadAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                })?;
                Ok((alias.to_ascii_lowercase(), keys))
            })
            .collect::<Result<HashMap<_, _>, KeyParseError>>()?;

        Ok(Self { aliases })
    }

    /// Parse a line of whitespace-separated tokens.
    pub fn parse(&self, line: &str) -> Result<Vec<Key>, KeyParseError> {
        let mut keys = Vec::new();
        for word in line.split_whitespace() {
            match self.aliases.get(&word.to_ascii_lowercase()) {
                Some(mapped) => keys.extend_from_slice(mapped),
                None => keys.extend(parse_token(word)?),
            }
        }
        Ok(keys)
    }
}
