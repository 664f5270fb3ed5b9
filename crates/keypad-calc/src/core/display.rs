//! Display string and numeric formatting
//!
//! The display holds what the user typed (or the last result) as text, capped
//! at a configurable number of characters. Numeric values written to it go
//! through [`format_value`], which falls back to exponential notation when the
//! plain text would not fit.

use serde::{Deserialize, Serialize};

/// Default maximum number of characters on the display
pub const DEFAULT_MAX_DIGITS: usize = 9;

/// Default fraction digits used in exponential notation
pub const DEFAULT_EXPONENT_FRACTION_DIGITS: usize = 5;

/// Formats a numeric value for the display.
///
/// Values whose plain decimal text fits in `max_digits` characters are shown
/// as-is; longer ones are rendered as `d.ddddde±x` with
/// `exponent_fraction_digits` fraction digits.
#[must_use]
pub fn format_value(value: f64, max_digits: usize, exponent_fraction_digits: usize) -> String {
    let plain = plain_text(value);
    if plain.len() > max_digits && value.is_finite() {
        exponential_text(value, exponent_fraction_digits)
    } else {
        plain
    }
}

/// Magnitudes at or above this print in exponential form
const PLAIN_UPPER_BOUND: f64 = 1e21;

/// Magnitudes below this print in exponential form
const PLAIN_LOWER_BOUND: f64 = 1e-6;

/// Significant digits that print any f64 exactly
const EXACT_DIGITS: usize = 767;

/// Shortest round-trip text, negative zero as "0".
///
/// Very large and very small magnitudes use the shortest exponential form
/// (`1e-7`, `2.5e+21`).
fn plain_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= PLAIN_UPPER_BOUND || value.abs() < PLAIN_LOWER_BOUND {
        signed_exponent(&format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// Exponential text with `fraction_digits` fraction digits (`1.50000e+10`).
///
/// Rounds the exact binary value half away from zero, so a tie such as
/// 1000005000 becomes `1.00001e+9`.
fn exponential_text(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return signed_exponent(&format!("{value:.fraction_digits$e}"));
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let round_up = digits.get(fraction_digits + 1).is_some_and(|&d| d >= 5);
    digits.truncate(fraction_digits + 1);

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            digits.pop();
            exponent += 1;
        }
    }

    let mut text = String::with_capacity(fraction_digits + 8);
    if value.is_sign_negative() {
        text.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == 1 {
            text.push('.');
        }
        text.push(char::from(b'0' + d));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{text}e{sign}{}", exponent.unsigned_abs())
}

/// Adds the explicit `+` to a non-negative exponent (`1e21` -> `1e+21`)
fn signed_exponent(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw.to_string(),
    }
}

/// Text currently shown on the calculator display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayString {
    text: String,
    max_digits: usize,
}

impl Default for DisplayString {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl DisplayString {
    /// Creates a display showing "0"
    #[must_use]
    pub fn new(max_digits: usize) -> Self {
        Self {
            text: "0".to_string(),
            max_digits,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters shown
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True while awaiting an operand after an operator press
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the display shows exactly "0"
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == "0"
    }

    /// True when the display already holds a decimal separator
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.text.contains('.')
    }

    /// Maximum number of characters accepted from typing
    #[must_use]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// True when typing another character would exceed the cap
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_digits
    }

    /// Replaces the text
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Appends a character if the cap allows it, returning whether it did
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Removes the last character, falling back to "0" when one or none is left
    pub fn backspace(&mut self) {
        if self.len() <= 1 {
            self.reset();
        } else {
            self.text.pop();
        }
    }

    /// Restores "0"
    pub fn reset(&mut self) {
        self.set("0");
    }

    /// Empties the display to await the next operand
    pub fn clear_for_operand(&mut self) {
        self.text.clear();
    }

    /// Writes a numeric value using [`format_value`]
    pub fn set_value(&mut self, value: f64, exponent_fraction_digits: usize) {
        self.text = format_value(value, self.max_digits, exponent_fraction_digits);
    }

    /// Parses the display as a number; `None` for empty or non-numeric text
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        parse_number(&self.text)
    }
}

impl std::fmt::Display for DisplayString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parses display text, rejecting empty input and NaN
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_value tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(8.0, 9, 5), "8");
        assert_eq!(format_value(-42.0, 9, 5), "-42");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_value(0.2, 9, 5), "0.2");
        assert_eq!(format_value(-3.5, 9, 5), "-3.5");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_value(-0.0, 9, 5), "0");
    }

    #[test]
    fn test_format_at_cap_stays_plain() {
        assert_eq!(format_value(123_456_789.0, 9, 5), "123456789");
    }

    #[test]
    fn test_format_over_cap_goes_exponential() {
        assert_eq!(format_value(1_234_567_890.0, 9, 5), "1.23457e+9");
        assert_eq!(format_value(10_000_000_000.0, 9, 5), "1.00000e+10");
    }

    #[test]
    fn test_format_small_fraction_goes_exponential() {
        assert_eq!(format_value(0.333_333_333, 9, 5), "3.33333e-1");
    }

    #[test]
    fn test_format_negative_exponential() {
        assert_eq!(format_value(-9_876_543_210.0, 9, 5), "-9.87654e+9");
    }

    #[test]
    fn test_format_respects_fraction_digits() {
        assert_eq!(format_value(1_234_567_890.0, 9, 2), "1.23e+9");
    }

    #[test]
    fn test_format_exponential_ties_round_up() {
        assert_eq!(format_value(1_000_005_000.0, 9, 5), "1.00001e+9");
        assert_eq!(format_value(-1_000_005_000.0, 9, 5), "-1.00001e+9");
        assert_eq!(format_value(1_250_000_000.0, 9, 1), "1.3e+9");
    }

    #[test]
    fn test_format_exponential_carry() {
        assert_eq!(format_value(9_999_999_999.0, 9, 5), "1.00000e+10");
        assert_eq!(format_value(0.000_999_999_9, 9, 2), "1.00e-3");
    }

    #[test]
    fn test_format_tiny_values_use_short_exponent() {
        assert_eq!(format_value(1e-7, 9, 5), "1e-7");
        assert_eq!(format_value(-2.5e-8, 9, 5), "-2.5e-8");
        assert_eq!(format_value(1.234_567_8e-12, 9, 5), "1.23457e-12");
        assert_eq!(format_value(0.000_001, 9, 5), "0.000001");
    }

    #[test]
    fn test_format_huge_values_with_wide_display() {
        assert_eq!(format_value(1e21, 30, 5), "1e+21");
        assert_eq!(format_value(1e20, 30, 5), "100000000000000000000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_value(f64::INFINITY, 9, 5), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY, 9, 5), "-Infinity");
        assert_eq!(format_value(f64::NAN, 9, 5), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY, 3, 5), "-Infinity");
    }

    // ===== DisplayString tests =====

    #[test]
    fn test_display_new_shows_zero() {
        let d = DisplayString::new(9);
        assert_eq!(d.as_str(), "0");
        assert!(d.is_zero());
        assert!(!d.is_empty());
    }

    #[test]
    fn test_display_default_cap() {
        assert_eq!(DisplayString::default().max_digits(), DEFAULT_MAX_DIGITS);
    }

    #[test]
    fn test_display_push_respects_cap() {
        let mut d = DisplayString::new(3);
        d.set("12");
        assert!(d.push('3'));
        assert!(!d.push('4'));
        assert_eq!(d.as_str(), "123");
    }

    #[test]
    fn test_display_backspace() {
        let mut d = DisplayString::new(9);
        d.set("123");
        d.backspace();
        assert_eq!(d.as_str(), "12");
        d.backspace();
        d.backspace();
        assert_eq!(d.as_str(), "0");
    }

    #[test]
    fn test_display_backspace_on_empty_restores_zero() {
        let mut d = DisplayString::new(9);
        d.clear_for_operand();
        d.backspace();
        assert_eq!(d.as_str(), "0");
    }

    #[test]
    fn test_display_has_decimal() {
        let mut d = DisplayString::new(9);
        assert!(!d.has_decimal());
        d.set("0.");
        assert!(d.has_decimal());
    }

    #[test]
    fn test_display_parse() {
        let mut d = DisplayString::new(9);
        d.set("-3.5");
        assert_eq!(d.parse(), Some(-3.5));
        d.set("12.");
        assert_eq!(d.parse(), Some(12.0));
        d.set("1.23457e+9");
        assert_eq!(d.parse(), Some(1.23457e9));
        d.clear_for_operand();
        assert_eq!(d.parse(), None);
    }

    #[test]
    fn test_parse_number_rejects_nan() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn test_display_set_value() {
        let mut d = DisplayString::new(9);
        d.set_value(20.0, 5);
        assert_eq!(d.to_string(), "20");
    }
}
