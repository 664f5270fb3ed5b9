//! Structured input events accepted by the controller

use serde::{Deserialize, Serialize};

use super::Operator;

/// Unary display transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Flip the sign (+/-)
    ToggleSign,
    /// Divide by one hundred (%)
    Percent,
}

impl Modifier {
    /// Returns the keypad label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
        }
    }

    /// Parses a modifier label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+/-" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }
}

/// One discrete input to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four arithmetic operators
    Operator(Operator),
    /// Compute the pending operation
    Equals,
    /// Apply a unary modifier to the display
    Modifier(Modifier),
    /// Remove the last character (backspace)
    Clear,
    /// Reset everything
    AllClear,
}

impl InputEvent {
    /// Creates a digit event, `None` when `d` is not a single decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a single character to an event.
    ///
    /// Covers digits, `.`, the four operators, `%` and `=`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '%' => Some(Self::Modifier(Modifier::Percent)),
            '=' => Some(Self::Equals),
            _ => {
                let mut buf = [0u8; 4];
                Operator::from_symbol(c.encode_utf8(&mut buf)).map(Self::Operator)
            }
        }
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Modifier(m) => m.symbol().to_string(),
            Self::Clear => "C".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Returns the DOM `data-type` of the button producing this event
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Digit(_) => "number",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equal",
            Self::Modifier(_) => "modifier",
            Self::Clear => "clear",
            Self::AllClear => "all-clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor_bounds() {
        assert_eq!(InputEvent::digit(0), Some(InputEvent::Digit(0)));
        assert_eq!(InputEvent::digit(9), Some(InputEvent::Digit(9)));
        assert_eq!(InputEvent::digit(10), None);
    }

    #[test]
    fn test_from_char_digits() {
        for c in '0'..='9' {
            let expected = c.to_digit(10).unwrap() as u8;
            assert_eq!(InputEvent::from_char(c), Some(InputEvent::Digit(expected)));
        }
    }

    #[test]
    fn test_from_char_operators() {
        assert_eq!(
            InputEvent::from_char('+'),
            Some(InputEvent::Operator(Operator::Add))
        );
        assert_eq!(
            InputEvent::from_char('-'),
            Some(InputEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            InputEvent::from_char('*'),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_char('/'),
            Some(InputEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_char_special() {
        assert_eq!(InputEvent::from_char('.'), Some(InputEvent::Decimal));
        assert_eq!(InputEvent::from_char('='), Some(InputEvent::Equals));
        assert_eq!(
            InputEvent::from_char('%'),
            Some(InputEvent::Modifier(Modifier::Percent))
        );
        assert_eq!(InputEvent::from_char('^'), None);
        assert_eq!(InputEvent::from_char('x'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(InputEvent::Digit(5).label(), "5");
        assert_eq!(InputEvent::Decimal.label(), ".");
        assert_eq!(InputEvent::Operator(Operator::Divide).label(), "/");
        assert_eq!(InputEvent::Equals.label(), "=");
        assert_eq!(InputEvent::Modifier(Modifier::ToggleSign).label(), "+/-");
        assert_eq!(InputEvent::Clear.label(), "C");
        assert_eq!(InputEvent::AllClear.label(), "AC");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(InputEvent::Digit(1).kind(), "number");
        assert_eq!(InputEvent::Operator(Operator::Add).kind(), "operator");
        assert_eq!(InputEvent::AllClear.kind(), "all-clear");
    }

    #[test]
    fn test_modifier_symbol_roundtrip() {
        for m in [Modifier::ToggleSign, Modifier::Percent] {
            assert_eq!(Modifier::from_symbol(m.symbol()), Some(m));
        }
        assert_eq!(Modifier::from_symbol("!"), None);
    }
}
