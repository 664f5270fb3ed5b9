//! Unified calculator driver
//!
//! Behaviour is written once as `verify_*` functions over
//! [`CalculatorDriver`] and run against every frontend: the DOM driver
//! ([`crate::wasm::WasmDriver`]) and the terminal driver ([`TuiDriver`]).

use crate::core::{InputEvent, Modifier, Operator};

/// A frontend the behavioural checks can drive
pub trait CalculatorDriver {
    /// Presses the key producing `event`
    fn press(&mut self, event: InputEvent);

    /// Display text as the frontend renders it
    fn display(&self) -> String;

    /// Operator highlighted by the frontend
    fn selected_operator(&self) -> Option<Operator>;

    /// Returns to the initial state
    fn reset(&mut self);

    /// Presses a sequence of keys
    fn press_all(&mut self, events: &[InputEvent]) {
        for event in events {
            self.press(*event);
        }
    }
}

/// Converts a compact key script into events.
///
/// Besides [`InputEvent::from_char`] characters, `n` toggles the sign, `C`
/// is clear and `A` is all-clear. Unknown characters are skipped.
#[must_use]
pub fn script(keys: &str) -> Vec<InputEvent> {
    keys.chars()
        .filter_map(|c| match c {
            'n' => Some(InputEvent::Modifier(Modifier::ToggleSign)),
            'C' => Some(InputEvent::Clear),
            'A' => Some(InputEvent::AllClear),
            other => InputEvent::from_char(other),
        })
        .collect()
}

fn run_script<D: CalculatorDriver>(driver: &mut D, keys: &str) -> String {
    driver.reset();
    driver.press_all(&script(keys));
    driver.display()
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::core::{InputEvent, Modifier, Operator};
    use crate::tui::{render_lines, TerminalApp};

    /// Drives a [`TerminalApp`] through real key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: TerminalApp,
    }

    impl TuiDriver {
        /// Creates a driver over a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(TerminalApp::new())
        }

        /// Creates a driver over an existing app
        #[must_use]
        pub fn with_app(app: TerminalApp) -> Self {
            Self { app }
        }

        /// The underlying app
        #[must_use]
        pub fn app(&self) -> &TerminalApp {
            &self.app
        }

        /// Mutable access to the underlying app
        pub fn app_mut(&mut self) -> &mut TerminalApp {
            &mut self.app
        }
    }

    /// Key a user would type for `event`
    fn key_for(event: InputEvent) -> KeyEvent {
        let code = match event {
            InputEvent::Digit(d) => KeyCode::Char(char::from(b'0' + d.min(9))),
            InputEvent::Decimal => KeyCode::Char('.'),
            InputEvent::Operator(op) => KeyCode::Char(match op {
                Operator::Add => '+',
                Operator::Subtract => '-',
                Operator::Multiply => '*',
                Operator::Divide => '/',
            }),
            InputEvent::Equals => KeyCode::Enter,
            InputEvent::Modifier(Modifier::ToggleSign) => KeyCode::Char('n'),
            InputEvent::Modifier(Modifier::Percent) => KeyCode::Char('%'),
            InputEvent::Clear => KeyCode::Backspace,
            InputEvent::AllClear => KeyCode::Esc,
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.handle_key(key_for(event));
        }

        fn display(&self) -> String {
            render_lines(&self.app)
                .get(1)
                .map(|line| line.trim_matches(|c: char| c == '│' || c.is_whitespace()).to_string())
                .unwrap_or_default()
        }

        fn selected_operator(&self) -> Option<Operator> {
            self.app.controller().selected_operator()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behaviour =====

/// Four operators end to end
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run_script(driver, "5+3="), "8");
    assert_eq!(run_script(driver, "3-5="), "-2");
    assert_eq!(run_script(driver, "6*7="), "42");
    assert_eq!(run_script(driver, "7/2="), "3.5");
    assert_eq!(run_script(driver, ".1+.2="), "0.3");
}

/// Left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run_script(driver, "2+3*"), "5");
    driver.press_all(&script("4="));
    assert_eq!(driver.display(), "20");

    assert_eq!(run_script(driver, "5+3=-1="), "7");
}

/// Literal error displays and recovery
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run_script(driver, "1/0="), "Cannot divide by 0");
    assert_eq!(run_script(driver, "A="), "Error");

    driver.press(InputEvent::Digit(4));
    assert_eq!(driver.display(), "4");

    assert_eq!(run_script(driver, "1/0=A"), "0");
}

/// Sign toggle and percentage
pub fn verify_modifiers<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run_script(driver, "20%"), "0.2");
    assert_eq!(run_script(driver, "9n"), "-9");
    driver.press(InputEvent::Modifier(Modifier::ToggleSign));
    assert_eq!(driver.display(), "9");
    assert_eq!(run_script(driver, "n"), "0");
}

/// Display cap, decimal point and backspace
pub fn verify_display_editing<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run_script(driver, "123456789012"), "123456789");
    assert_eq!(run_script(driver, "3.."), "3.");
    assert_eq!(run_script(driver, "."), "0.");
    assert_eq!(run_script(driver, "123C"), "12");
    assert_eq!(run_script(driver, "7C"), "0");
    assert_eq!(run_script(driver, "999999999*9="), "9.00000e+9");
    assert_eq!(run_script(driver, ".0001*.001="), "1e-7");
    assert_eq!(run_script(driver, "5+3=."), "8.");
    assert_eq!(run_script(driver, "1/2=."), "0.5");
}

/// Operator highlight follows operator and equals presses
pub fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) {
    run_script(driver, "2+");
    assert_eq!(driver.selected_operator(), Some(Operator::Add));
    driver.press(InputEvent::Operator(Operator::Multiply));
    assert_eq!(driver.selected_operator(), Some(Operator::Multiply));
    driver.press_all(&script("3="));
    assert_eq!(driver.selected_operator(), None);

    run_script(driver, "2-A");
    assert_eq!(driver.selected_operator(), None);
}

/// Runs every behavioural check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_error_handling(driver);
    verify_modifiers(driver);
    verify_display_editing(driver);
    verify_operator_highlight(driver);
}
