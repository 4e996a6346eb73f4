pub mod keypad;
pub mod screen;

pub use keypad::{KeyParseError, Keypad, normalize_expression, parse_keys};
pub use screen::{Screen, ScreenFormat, TerminalScreen};
