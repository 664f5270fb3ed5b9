//! Calculator core: evaluator, display formatting and the input controller
//!
//! Everything in here is presentation-free. Frontends translate their native
//! input into [`InputEvent`]s and render [`Controller::display`].

pub mod controller;
pub mod display;
mod event;
mod operations;

pub use controller::{CalculatorState, Controller, ControllerSnapshot};
pub use display::{format_value, DisplayString};
pub use event::{InputEvent, Modifier};
pub use operations::{
    evaluate, evaluate_symbol, evaluate_with_precision, round_significant, stabilize, Operator,
    DEFAULT_PRECISION_DIGITS, RESULT_SIGNIFICANT_DIGITS,
};

/// Raw arithmetic helpers without operand stabilization
pub mod arithmetic {
    pub use super::operations::{add, divide, multiply, subtract};
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator errors
///
/// The `Display` text of each variant is exactly what the calculator shows
/// on its display while the error is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Cannot divide by 0")]
    DivisionByZero,
    /// An operand was missing or did not parse as a number
    #[error("Error")]
    InvalidOperand,
}

impl CalcError {
    /// Text shown on the display for this error
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by 0",
            Self::InvalidOperand => "Error",
        }
    }
}
