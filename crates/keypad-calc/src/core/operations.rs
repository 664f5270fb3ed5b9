//! Arithmetic evaluator for the four calculator operators
//!
//! Operands are stabilized to a fixed number of decimal digits before the
//! operation. The result is then trimmed to 15 significant digits, which drops
//! binary representation noise (`0.1 + 0.2`) without flushing tiny results to
//! zero.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Decimal digits kept when stabilizing operands
pub const DEFAULT_PRECISION_DIGITS: u32 = 9;

/// Significant digits kept in a computed result
pub const RESULT_SIGNIFICANT_DIGITS: usize = 15;

/// Beyond this magnitude a scaled f64 has no fractional part left to round
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0; // 2^52

/// The closed set of calculator operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator symbol, `None` for anything outside the set
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Short name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rounds `value` to `precision_digits` decimal digits.
///
/// Ties round toward positive infinity. Integers, non-finite values and
/// values too large to carry a fractional part are returned unchanged.
#[must_use]
pub fn stabilize(value: f64, precision_digits: u32) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value;
    }
    let scale = 10f64.powi(precision_digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return value;
    }
    (scaled + 0.5).floor() / scale
}

/// Rounds `value` to `digits` significant digits.
///
/// Zero and non-finite values are returned unchanged.
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    format!("{:.*e}", digits.saturating_sub(1), value)
        .parse()
        .unwrap_or(value)
}

/// Evaluates `a op b` with the default precision
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    evaluate_with_precision(a, b, op, DEFAULT_PRECISION_DIGITS)
}

/// Evaluates `a op b`, stabilizing both operands and trimming the result
pub fn evaluate_with_precision(
    a: f64,
    b: f64,
    op: Operator,
    precision_digits: u32,
) -> CalcResult<f64> {
    let a = stabilize(a, precision_digits);
    let b = stabilize(b, precision_digits);

    let raw = match op {
        Operator::Add => add(a, b),
        Operator::Subtract => subtract(a, b),
        Operator::Multiply => multiply(a, b),
        Operator::Divide => divide(a, b)?,
    };

    Ok(round_significant(raw, RESULT_SIGNIFICANT_DIGITS))
}

/// Evaluates by operator symbol.
///
/// Returns `None` for an unknown symbol so callers can treat it as a no-op.
#[must_use]
pub fn evaluate_symbol(a: f64, b: f64, symbol: &str) -> Option<CalcResult<f64>> {
    Operator::from_symbol(symbol).map(|op| evaluate(a, b, op))
}

/// Addition: a + b
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtraction: a - b
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplication: a * b
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Division: a / b
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
