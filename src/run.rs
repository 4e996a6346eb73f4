//! Command implementations behind the CLI.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::calculator::{ERROR_TEXT, evaluate, format_result};
use crate::engine::{Calculator, EngineState};
use crate::ui::{Keypad, Screen, normalize_expression};
use crate::view::DisplayView;

#[derive(Debug, Serialize)]
struct EvalOutput<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Evaluate one expression and print the formatted result.
///
/// Evaluation failures are printed (in JSON mode) and returned as errors so
/// the process exits non-zero.
pub fn eval(expression: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let normalized = normalize_expression(expression);
    let result = evaluate(&normalized);

    if json {
        let output = match &result {
            Ok(value) => EvalOutput {
                expression: &normalized,
                value: Some(*value),
                display: format_result(*value),
                error: None,
            },
            Err(err) => EvalOutput {
                expression: &normalized,
                value: None,
                display: ERROR_TEXT.to_string(),
                error: Some(err.to_string()),
            },
        };
        serde_json::to_writer(&mut *out, &output)?;
        writeln!(out)?;
    }

    let value = result.map_err(|err| anyhow::anyhow!("{}: {}", normalized, err))?;
    if !json {
        writeln!(out, "{}", format_result(value))?;
    }
    Ok(())
}

/// Press `line` on a fresh calculator and render the final display.
pub fn keys(line: &str, keypad: &Keypad, screen: &mut impl Screen) -> anyhow::Result<()> {
    let state = keypad
        .parse(line)?
        .into_iter()
        .fold(EngineState::new(), EngineState::handle);
    screen.render(&DisplayView::from_state(&state))?;
    Ok(())
}

/// Interactive loop: each input line is a batch of keys.
///
/// Meta commands: `:undo`, `:redo`, `:quit`. Lines that fail to parse are
/// reported on stderr and leave the state untouched.
pub fn repl(
    input: impl BufRead,
    keypad: &Keypad,
    screen: &mut impl Screen,
    history_limit: usize,
) -> anyhow::Result<()> {
    let mut calc = Calculator::new(history_limit);
    screen.render(&DisplayView::from_state(calc.state()))?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":undo" | ":u" => {
                if !calc.undo() {
                    tracing::info!("nothing to undo");
                }
            }
            ":redo" | ":r" => {
                if !calc.redo() {
                    tracing::info!("nothing to redo");
                }
            }
            other => match keypad.parse(other) {
                Ok(keys) => calc.press_all(keys),
                Err(err) => {
                    eprintln!("{}", err);
                    continue;
                }
            },
        }
        screen.render(&DisplayView::from_state(calc.state()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ScreenFormat, TerminalScreen};

    fn eval_output(expression: &str, json: bool) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = eval(expression, json, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn repl_output(input: &str) -> String {
        let mut screen = TerminalScreen::new(Vec::new(), ScreenFormat::Plain);
        repl(input.as_bytes(), &Keypad::default(), &mut screen, 16).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn test_eval_plain() {
        let (result, out) = eval_output("12+8*2", false);
        assert!(result.is_ok());
        assert_eq!(out, "28\n");
    }

    #[test]
    fn test_eval_error() {
        let (result, out) = eval_output("5/0", false);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("division by zero"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_eval_json() {
        let (result, out) = eval_output("1/3", true);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["display"], "0.3333");
        assert_eq!(value["value"], 0.33333333);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_eval_json_error() {
        let (result, out) = eval_output("5%0", true);
        assert!(result.is_err());
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["display"], "Error");
        assert_eq!(value["error"], "modulo by zero");
    }

    #[test]
    fn test_keys() {
        let mut screen = TerminalScreen::new(Vec::new(), ScreenFormat::Plain);
        keys("12 + 8 =", &Keypad::default(), &mut screen).unwrap();
        assert_eq!(String::from_utf8(screen.into_inner()).unwrap(), "20  [C]\n");
    }

    #[test]
    fn test_keys_rejects_unknown() {
        let mut screen = TerminalScreen::new(Vec::new(), ScreenFormat::Plain);
        assert!(keys("12 q", &Keypad::default(), &mut screen).is_err());
    }

    #[test]
    fn test_repl_session() {
        let out = repl_output("12+8\n=\n:undo\n:redo\nC\nC\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0  [AC]",
                "12+8  [C]",
                "20  [C]",
                "12+8  [C]",
                "20  [C]",
                "0  [AC]",
                "0  [AC]",
            ]
        );
    }

    #[test]
    fn test_repl_quit_and_bad_lines() {
        let out = repl_output("7\n???\n:quit\n9\n");
        assert_eq!(out, "0  [AC]\n7  [C]\n");
    }
}
