//! Keypad Calculator
//!
//! A four-function keypad calculator: a pure arithmetic evaluator, an
//! input/display controller driven by discrete key events, and thin DOM and
//! terminal frontends that translate their native input into those events.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Controller::new();
//! calc.dispatch_all([
//!     InputEvent::Digit(5),
//!     InputEvent::Operator(Operator::Add),
//!     InputEvent::Digit(3),
//!     InputEvent::Equals,
//! ]);
//! assert_eq!(calc.display(), "8");
//!
//! calc.dispatch_all([
//!     InputEvent::Operator(Operator::Divide),
//!     InputEvent::Digit(0),
//!     InputEvent::Equals,
//! ]);
//! assert_eq!(calc.display(), "Cannot divide by 0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod feedback;

#[cfg(feature = "tui")]
pub mod tui;

/// DOM frontend; the mock document works without a browser
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::{
        evaluate, evaluate_symbol, format_value, CalcError, CalcResult, CalculatorState,
        Controller, ControllerSnapshot, DisplayString, InputEvent, Modifier, Operator,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::feedback::PressFeedback;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}
