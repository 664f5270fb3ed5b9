//! Input/display controller
//!
//! A single explicit state machine: every [`InputEvent`] goes through
//! [`Controller::dispatch`], is handled to completion, and leaves the display
//! and [`CalculatorState`] consistent for the next one.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::arithmetic;
use super::display::DisplayString;
use super::event::{InputEvent, Modifier};
use super::operations::{evaluate_with_precision, Operator};
use super::CalcError;
use crate::config::CalculatorConfig;

/// Operands and flags of the pending computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left operand, captured on operator press or carried from a result
    pub first_operand: Option<f64>,
    /// Operator waiting for its right operand
    pub pending_operator: Option<Operator>,
    /// Right operand parsed at the last equals/chain step
    pub second_operand: Option<f64>,
    /// The display shows a freshly computed result
    pub result_shown: bool,
}

/// Serializable view of the controller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    /// Rendered display text (error text while an error is active)
    pub display: String,
    /// Pending computation
    pub state: CalculatorState,
    /// Active error, if any
    pub error: Option<CalcError>,
    /// Highlighted operator key
    pub selected_operator: Option<Operator>,
}

/// Calculator controller owning the display and the pending computation
#[derive(Debug, Clone)]
pub struct Controller {
    config: CalculatorConfig,
    display: DisplayString,
    state: CalculatorState,
    error: Option<CalcError>,
    selected_operator: Option<Operator>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a controller with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a controller with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            display: DisplayString::new(config.max_digits),
            config,
            state: CalculatorState::default(),
            error: None,
            selected_operator: None,
        }
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the rendered display text
    #[must_use]
    pub fn display(&self) -> &str {
        match self.error {
            Some(err) => err.display_text(),
            None => self.display.as_str(),
        }
    }

    /// Returns the underlying display string (ignores any active error)
    #[must_use]
    pub fn display_string(&self) -> &DisplayString {
        &self.display
    }

    /// Returns the pending computation
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the active error, if any
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Returns the highlighted operator key
    #[must_use]
    pub fn selected_operator(&self) -> Option<Operator> {
        self.selected_operator
    }

    /// Returns a serializable snapshot
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            display: self.display().to_string(),
            state: self.state,
            error: self.error,
            selected_operator: self.selected_operator,
        }
    }

    /// Applies one input event
    pub fn dispatch(&mut self, event: InputEvent) {
        debug!(?event, display = %self.display(), "dispatch");
        match event {
            InputEvent::Digit(d) => self.enter_digit(d),
            InputEvent::Decimal => self.enter_decimal(),
            InputEvent::Operator(op) => self.enter_operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::Modifier(m) => self.apply_modifier(m),
            InputEvent::Clear => self.clear(),
            InputEvent::AllClear => self.all_clear(),
        }
        trace!(display = %self.display(), state = ?self.state, "transition");
    }

    /// Applies a sequence of events in order
    pub fn dispatch_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Enters a digit
    pub fn enter_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!(digit = d, "ignoring non-decimal digit");
            return;
        };

        if self.error.take().is_some() || self.state.result_shown {
            self.start_fresh(c);
        } else if self.display.is_zero() {
            self.display.set(c.encode_utf8(&mut [0u8; 4]));
        } else if !self.display.push(c) {
            trace!(max_digits = self.display.max_digits(), "display full");
        }
    }

    /// Enters the decimal point.
    ///
    /// A shown result is extended like typed text; the next digit still
    /// starts a fresh number.
    pub fn enter_decimal(&mut self) {
        if self.error.take().is_some() {
            self.display.set("0.");
            return;
        }

        if self.display.has_decimal() {
            return;
        }

        if self.display.is_zero() || self.display.is_empty() {
            self.display.set("0.");
        } else if !self.display.push('.') {
            trace!(max_digits = self.display.max_digits(), "display full");
        }
    }

    /// Presses an operator key, resolving a pending computation first
    pub fn enter_operator(&mut self, op: Operator) {
        if self.error.is_some() {
            debug!(%op, "operator ignored while error is shown");
            return;
        }

        match (self.state.first_operand, self.state.pending_operator) {
            (Some(first), Some(pending)) => {
                if let Some(second) = self.display.parse() {
                    match self.compute(first, second, pending) {
                        Ok(result) => {
                            self.show_value(result);
                            self.state.first_operand = Some(result);
                            self.state.second_operand = None;
                            self.state.result_shown = true;
                        }
                        Err(err) => {
                            self.show_error(err);
                            return;
                        }
                    }
                }
            }
            _ => {
                self.state.first_operand = self.display.parse();
            }
        }

        self.selected_operator = Some(op);
        self.state.pending_operator = Some(op);

        if !self.state.result_shown {
            self.display.clear_for_operand();
        }
    }

    /// Computes the pending operation
    pub fn equals(&mut self) {
        if self.error.is_some() {
            return;
        }

        self.selected_operator = None;

        let second = self.display.parse();
        self.state.second_operand = second;

        let (Some(first), Some(second)) = (self.state.first_operand, second) else {
            self.show_error(CalcError::InvalidOperand);
            return;
        };

        let Some(op) = self.state.pending_operator else {
            debug!("equals without pending operator");
            return;
        };

        match self.compute(first, second, op) {
            Ok(result) => {
                self.show_value(result);
                self.state.result_shown = true;
                self.state.first_operand = Some(result);
                self.state.pending_operator = None;
            }
            Err(err) => self.show_error(err),
        }
    }

    /// Applies a sign flip or percentage to the displayed value
    pub fn apply_modifier(&mut self, modifier: Modifier) {
        if self.error.is_some() || self.display.is_zero() {
            return;
        }

        let Some(value) = self.display.parse() else {
            debug!(?modifier, "modifier ignored, display is not a number");
            return;
        };

        let result = match modifier {
            Modifier::ToggleSign => Ok(arithmetic::multiply(value, -1.0)),
            Modifier::Percent => arithmetic::divide(value, 100.0),
        };

        match result {
            Ok(value) => self.show_value(value),
            Err(err) => self.show_error(err),
        }
    }

    /// Removes the last character (backspace)
    pub fn clear(&mut self) {
        if self.error.take().is_some() {
            self.display.reset();
            return;
        }
        self.display.backspace();
    }

    /// Resets display and pending computation
    pub fn all_clear(&mut self) {
        self.display.reset();
        self.state = CalculatorState::default();
        self.error = None;
        self.selected_operator = None;
    }

    fn start_fresh(&mut self, c: char) {
        self.state.result_shown = false;
        self.display.set(c.encode_utf8(&mut [0u8; 4]));
    }

    fn compute(&self, a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
        evaluate_with_precision(a, b, op, self.config.precision_digits)
    }

    fn show_value(&mut self, value: f64) {
        self.display
            .set_value(value, self.config.exponent_fraction_digits);
    }

    fn show_error(&mut self, err: CalcError) {
        debug!(%err, "showing error");
        self.error = Some(err);
    }
}
