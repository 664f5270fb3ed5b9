//! Browser bindings
//!
//! The page script owns the real DOM; it forwards button clicks and key names
//! here and paints whatever [`BrowserCalculator::display`] returns.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::CalculatorConfig;
use crate::core::{Controller, InputEvent};
use crate::wasm::keypad::WasmKeypad;

/// Calculator exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: Controller,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            controller: Controller::new(),
            keypad: WasmKeypad::new(),
        }
    }

    /// Creates a calculator from a JSON settings object
    pub fn with_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            controller: Controller::with_config(config),
            keypad: WasmKeypad::new(),
        })
    }

    /// Text to paint into the display element
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.controller.display().to_string()
    }

    /// Symbol of the highlighted operator, if any
    #[wasm_bindgen(getter)]
    pub fn selected_operator(&self) -> Option<String> {
        self.controller
            .selected_operator()
            .map(|op| op.symbol().to_string())
    }

    /// Element id of the highlighted operator button, if any
    #[wasm_bindgen(getter)]
    pub fn selected_button(&self) -> Option<String> {
        let op = self.controller.selected_operator()?;
        self.keypad
            .find_by_event(InputEvent::Operator(op))
            .map(|b| b.id.clone())
    }

    /// How long a key-triggered highlight should last
    #[wasm_bindgen(getter)]
    pub fn press_feedback_ms(&self) -> u32 {
        u32::try_from(self.controller.config().press_feedback_ms).unwrap_or(u32::MAX)
    }

    /// Handles a click on a button element; returns the new display text
    pub fn handle_button(&mut self, button_id: &str) -> String {
        if let Some(event) = self.keypad.handle_click(button_id) {
            self.controller.dispatch(event);
        }
        self.display()
    }

    /// Handles a keydown; returns the id of the button to highlight, if any
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        let button = self.keypad.find_by_key(key)?;
        let id = button.id.clone();
        self.controller.dispatch(button.event);
        Some(id)
    }

    /// Resets the calculator
    pub fn all_clear(&mut self) {
        self.controller.all_clear();
    }

    /// Controller snapshot as JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.controller.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keypad-calc initialized".into());
}
