//! Terminal application state

use std::time::Duration;

use crossterm::event::KeyEvent;

use super::input::{InputHandler, KeyAction};
use crate::config::CalculatorConfig;
use crate::core::{Controller, InputEvent};
use crate::feedback::PressFeedback;
use crate::wasm::WasmKeypad;

/// Calculator running in a terminal
#[derive(Debug)]
pub struct TerminalApp {
    controller: Controller,
    keypad: WasmKeypad,
    feedback: PressFeedback,
    input: InputHandler,
    should_quit: bool,
}

impl Default for TerminalApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalApp {
    /// Creates an app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates an app with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            controller: Controller::with_config(config),
            keypad: WasmKeypad::new(),
            feedback: PressFeedback::from_millis(config.press_feedback_ms),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// The controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable controller access
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// The keypad layout drawn on screen
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Press highlight tracker
    #[must_use]
    pub fn feedback(&self) -> &PressFeedback {
        &self.feedback
    }

    /// True once the user asked to leave
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let action = self.input.handle_key(key);
        match action {
            KeyAction::Input(event) => self.press(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        action
    }

    /// Feeds an event and lights up its key
    pub fn press(&mut self, event: InputEvent) {
        if let Some(button) = self.keypad.find_by_event(event) {
            self.feedback.press(button.id.as_str());
        }
        self.controller.dispatch(event);
    }

    /// Advances the highlight clock
    pub fn tick(&mut self, elapsed: Duration) {
        self.feedback.advance(elapsed);
    }

    /// Resets the calculator and drops highlights
    pub fn reset(&mut self) {
        self.controller.all_clear();
        self.feedback.clear();
    }
}
