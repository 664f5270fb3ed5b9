//! DOM driver
//!
//! Wires the mock document, the keypad and the controller together the way
//! the page script does: listeners translate DOM events into
//! [`InputEvent`]s, and after every event the display text and operator
//! highlight are written back to the document.

use std::time::Duration;

use tracing::trace;

use super::dom::{DomEvent, MockDom, ACTIVE_CLASS, SELECTED_CLASS};
use super::keypad::{WasmKeypad, DISPLAY_ID};
use crate::config::CalculatorConfig;
use crate::core::{Controller, InputEvent, Operator};
use crate::driver::CalculatorDriver;
use crate::feedback::PressFeedback;

/// Page-level driver over a [`MockDom`]
#[derive(Debug)]
pub struct WasmDriver {
    controller: Controller,
    keypad: WasmKeypad,
    dom: MockDom,
    feedback: PressFeedback,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let keypad = WasmKeypad::new();
        let dom = keypad.build_dom();
        Self {
            controller: Controller::with_config(config),
            feedback: PressFeedback::from_millis(config.press_feedback_ms),
            keypad,
            dom,
        }
    }

    /// The controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// The press feedback tracker
    #[must_use]
    pub fn feedback(&self) -> &PressFeedback {
        &self.feedback
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.text(DISPLAY_ID).unwrap_or_default()
    }

    /// Clicks a button by element id, returning the event it produced
    pub fn click(&mut self, element_id: &str) -> Option<InputEvent> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let event = self.keypad.handle_click(element_id)?;
        self.controller.dispatch(event);
        self.sync_dom();
        Some(event)
    }

    /// Presses a keyboard key.
    ///
    /// A key matching a button lights it up for the feedback duration and
    /// then acts as a click on it. Other keys are recorded and ignored.
    pub fn key_down(&mut self, key: &str) -> Option<InputEvent> {
        self.dom.dispatch_event(DomEvent::key_down(key));
        let Some(button) = self.keypad.find_by_key(key) else {
            trace!(key, "unmapped key");
            return None;
        };
        let id = button.id.clone();

        self.feedback.press(id.as_str());
        self.dom.toggle_class(&id, ACTIVE_CLASS, true);
        self.click(&id)
    }

    /// Finger down on a button
    pub fn touch_start(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::touch_start(element_id));
    }

    /// Finger lifted from a button
    pub fn touch_end(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::touch_end(element_id));
    }

    /// Advances the clock, clearing expired key highlights
    pub fn tick(&mut self, ms: u64) {
        for id in self.feedback.advance(Duration::from_millis(ms)) {
            self.dom.toggle_class(&id, ACTIVE_CLASS, false);
        }
    }

    fn sync_dom(&mut self) {
        self.dom.set_text(DISPLAY_ID, self.controller.display());

        let selected = self.controller.selected_operator();
        for button in self.keypad.operator_buttons() {
            let on = matches!(button.event, InputEvent::Operator(op) if Some(op) == selected);
            self.dom.toggle_class(&button.id, SELECTED_CLASS, on);
        }
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, event: InputEvent) {
        if let Some(id) = self.keypad.find_by_event(event).map(|b| b.id.clone()) {
            self.click(&id);
        }
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn selected_operator(&self) -> Option<Operator> {
        let selected = self
            .keypad
            .operator_buttons()
            .find(|b| self.dom.has_class(&b.id, SELECTED_CLASS))?;
        match selected.event {
            InputEvent::Operator(op) => Some(op),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.controller.all_clear();
        for id in self.feedback.active_ids().map(str::to_string).collect::<Vec<_>>() {
            self.dom.toggle_class(&id, ACTIVE_CLASS, false);
        }
        self.feedback.clear();
        self.dom.clear_event_history();
        self.sync_dom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Modifier;
    use crate::driver;

    fn click_all(driver: &mut WasmDriver, ids: &[&str]) {
        for id in ids {
            driver.click(id);
        }
    }

    // ===== Clicks =====

    #[test]
    fn test_initial_display() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display_text(), "0");
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_click_updates_display() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-5", "btn-plus", "btn-3", "btn-equals"]);
        assert_eq!(driver.display_text(), "8");
        assert_eq!(driver.dom().event_history().len(), 4);
    }

    #[test]
    fn test_click_unknown_element() {
        let mut driver = WasmDriver::new();
        assert_eq!(driver.click(DISPLAY_ID), None);
        assert_eq!(driver.display_text(), "0");
        assert_eq!(driver.dom().event_history().len(), 1);
    }

    #[test]
    fn test_click_returns_event() {
        let mut driver = WasmDriver::new();
        assert_eq!(
            driver.click("btn-sign"),
            Some(InputEvent::Modifier(Modifier::ToggleSign))
        );
    }

    #[test]
    fn test_error_rendered_in_display() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-1", "btn-divide", "btn-0", "btn-equals"]);
        assert_eq!(driver.display_text(), "Cannot divide by 0");
    }

    // ===== Operator highlight =====

    #[test]
    fn test_operator_selected_class() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-2", "btn-plus"]);
        assert!(driver.dom().has_class("btn-plus", SELECTED_CLASS));

        driver.click("btn-times");
        assert!(!driver.dom().has_class("btn-plus", SELECTED_CLASS));
        assert!(driver.dom().has_class("btn-times", SELECTED_CLASS));
        assert_eq!(driver.selected_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn test_equals_deselects() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-2", "btn-minus", "btn-1", "btn-equals"]);
        assert!(driver.dom().ids_with_class(SELECTED_CLASS).is_empty());
        assert_eq!(driver.selected_operator(), None);
    }

    // ===== Keyboard =====

    #[test]
    fn test_keyboard_sequence() {
        let mut driver = WasmDriver::new();
        for key in ["9", "*", "3", "Enter"] {
            driver.key_down(key);
        }
        assert_eq!(driver.display_text(), "27");
    }

    #[test]
    fn test_escape_and_backspace() {
        let mut driver = WasmDriver::new();
        for key in ["1", "2", "Backspace"] {
            driver.key_down(key);
        }
        assert_eq!(driver.display_text(), "1");
        driver.key_down("Escape");
        assert_eq!(driver.display_text(), "0");
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut driver = WasmDriver::new();
        assert_eq!(driver.key_down("Shift"), None);
        assert_eq!(driver.display_text(), "0");
        assert_eq!(driver.dom().event_history(), &[DomEvent::key_down("Shift")]);
    }

    #[test]
    fn test_key_press_feedback_expires() {
        let mut driver = WasmDriver::new();
        driver.key_down("7");
        assert!(driver.dom().has_class("btn-7", ACTIVE_CLASS));
        driver.tick(100);
        assert!(driver.dom().has_class("btn-7", ACTIVE_CLASS));
        driver.tick(50);
        assert!(!driver.dom().has_class("btn-7", ACTIVE_CLASS));
    }

    #[test]
    fn test_feedback_does_not_affect_state() {
        let mut driver = WasmDriver::new();
        driver.key_down("4");
        let before = driver.controller().snapshot();
        driver.tick(1_000);
        assert_eq!(driver.controller().snapshot(), before);
    }

    #[test]
    fn test_custom_feedback_duration() {
        let mut driver = WasmDriver::with_config(CalculatorConfig::new().with_press_feedback_ms(10));
        driver.key_down("Enter");
        assert!(driver.dom().has_class("btn-equals", ACTIVE_CLASS));
        driver.tick(10);
        assert!(!driver.dom().has_class("btn-equals", ACTIVE_CLASS));
    }

    // ===== Touch =====

    #[test]
    fn test_touch_toggles_active_without_input() {
        let mut driver = WasmDriver::new();
        driver.touch_start("btn-8");
        assert!(driver.dom().has_class("btn-8", ACTIVE_CLASS));
        driver.touch_end("btn-8");
        assert!(!driver.dom().has_class("btn-8", ACTIVE_CLASS));
        assert_eq!(driver.display_text(), "0");
    }

    // ===== CalculatorDriver =====

    #[test]
    fn test_driver_reset() {
        let mut driver = WasmDriver::new();
        driver.key_down("5");
        driver.key_down("+");
        CalculatorDriver::reset(&mut driver);
        assert_eq!(CalculatorDriver::display(&driver), "0");
        assert!(driver.dom().ids_with_class(ACTIVE_CLASS).is_empty());
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_unified_behaviour() {
        let mut driver = WasmDriver::new();
        driver::verify_all(&mut driver);
    }
}
