//! Expression evaluation for the calculator engine.
//!
//! Parses a flat `number (operator number)+` string and reduces it in two
//! precedence tiers: `×`, `÷` and `%` first, then `+` and `-`, each tier
//! left to right.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::engine::Operator;

/// Decimal places kept on every evaluated value to hide binary float noise.
pub const EVAL_PRECISION: i32 = 8;

/// Decimal places shown on the display.
pub const DISPLAY_PRECISION: usize = 4;

/// Display text used for any failed or non-finite result.
pub const ERROR_TEXT: &str = "Error";

lazy_static! {
    /// A whole expression: a signed number followed by at least one
    /// operator/number pair.
    static ref EXPRESSION: Regex = Regex::new(
        r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[+\-×÷%][+-]?(?:\d+\.\d*|\.\d+|\d+))+$"
    ).unwrap();

    /// The leading operand of an expression.
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)"
    ).unwrap();

    /// One `operator number` step after the leading operand.
    static ref OPERATION: Regex = Regex::new(
        r"([+\-×÷%])([+-]?(?:\d+\.\d*|\.\d+|\d+))"
    ).unwrap();
}

/// Why an expression could not be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("malformed expression")]
    MalformedExpression,
    #[error("result is not a finite number")]
    Overflow,
}

/// Evaluate an expression such as `12+8`, `-3×.5` or `1+2×3-4`.
///
/// Whitespace is ignored. The result is rounded to [`EVAL_PRECISION`]
/// decimal places.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let (first, steps) = tokenize(&compact)?;

    // First tier: fold ×, ÷ and % into the operand on their left.
    let mut operands = vec![first];
    let mut additive = Vec::new();
    for (op, rhs) in steps {
        if op.is_multiplicative() {
            let lhs = operands.last_mut().ok_or(EvalError::MalformedExpression)?;
            *lhs = apply(*lhs, op, rhs)?;
        } else {
            additive.push(op);
            operands.push(rhs);
        }
    }

    // Second tier: the remaining + / - chain.
    let mut values = operands.into_iter();
    let mut acc = values.next().ok_or(EvalError::MalformedExpression)?;
    for (op, rhs) in additive.into_iter().zip(values) {
        acc = apply(acc, op, rhs)?;
    }

    if !acc.is_finite() {
        return Err(EvalError::Overflow);
    }

    let value = round_to(acc, EVAL_PRECISION);
    tracing::debug!(expression = %compact, value, "evaluated expression");
    Ok(value)
}

/// Split a whitespace-free expression into its leading operand and the
/// following operator/operand pairs.
fn tokenize(expr: &str) -> Result<(f64, Vec<(Operator, f64)>), EvalError> {
    if !EXPRESSION.is_match(expr) {
        return Err(EvalError::MalformedExpression);
    }

    let leading = LEADING_NUMBER
        .find(expr)
        .ok_or(EvalError::MalformedExpression)?;
    let first = parse_number(leading.as_str())?;

    let steps = OPERATION
        .captures_iter(&expr[leading.end()..])
        .map(|caps| {
            let op = caps[1]
                .chars()
                .next()
                .and_then(Operator::from_symbol)
                .ok_or(EvalError::MalformedExpression)?;
            Ok((op, parse_number(&caps[2])?))
        })
        .collect::<Result<Vec<_>, EvalError>>()?;

    Ok((first, steps))
}

/// Parse a numeric literal. Accepts the `21.` and `.5` forms as well as
/// an explicit leading `+`.
fn parse_number(literal: &str) -> Result<f64, EvalError> {
    let unsigned = literal.strip_prefix('+').unwrap_or(literal);
    let normalized = unsigned.strip_suffix('.').unwrap_or(unsigned);
    normalized
        .parse::<f64>()
        .map_err(|_| EvalError::MalformedExpression)
}

fn apply(lhs: f64, op: Operator, rhs: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Divide => Ok(lhs / rhs),
        Operator::Modulo if rhs == 0.0 => Err(EvalError::ModuloByZero),
        Operator::Modulo => Ok(lhs % rhs),
    }
}

/// Round to a fixed number of decimal places.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits at that magnitude anyway.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format a value for the display.
///
/// Rounds half away from zero to [`DISPLAY_PRECISION`] decimals, renders
/// that many digits, then strips trailing zeros and a dangling decimal
/// point. Non-finite values render as [`ERROR_TEXT`].
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    // `{:.N}` alone breaks exact ties toward the even digit.
    let rounded = round_to(value, DISPLAY_PRECISION as i32);
    let formatted = format!("{:.*}", DISPLAY_PRECISION, rounded);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
