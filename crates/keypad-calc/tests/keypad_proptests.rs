//! Property-based tests for the keypad and DOM driver

#![allow(clippy::unwrap_used)]

use keypad_calc::driver::{script, CalculatorDriver};
use keypad_calc::prelude::*;
use keypad_calc::wasm::{ACTIVE_CLASS, DISPLAY_ID, SELECTED_CLASS};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

fn button_index_strategy() -> impl Strategy<Value = usize> {
    0usize..20usize
}

fn script_strategy() -> impl Strategy<Value = String> {
    let keys = vec![
        '0', '1', '5', '9', '.', '+', '-', '*', '/', '=', '%', 'n', 'C', 'A',
    ];
    prop::collection::vec(prop::sample::select(keys), 0..30)
        .prop_map(|chars| chars.into_iter().collect())
}

// ===== Layout properties =====

proptest! {
    #[test]
    fn prop_button_at_valid_position_exists((row, col) in grid_position_strategy()) {
        let keypad = WasmKeypad::new();
        let button = keypad.button_at(row, col);
        prop_assert!(button.is_some());
        let button = button.unwrap();
        prop_assert_eq!((button.row, button.col), (row, col));
    }

    #[test]
    fn prop_button_outside_grid_missing(row in 5usize..100usize, col in 4usize..100usize) {
        let keypad = WasmKeypad::new();
        prop_assert!(keypad.button_at(row, 0).is_none());
        prop_assert!(keypad.button_at(0, col).is_none());
    }

    #[test]
    fn prop_click_maps_to_button_event(index in button_index_strategy()) {
        let keypad = WasmKeypad::new();
        let button = &keypad.buttons()[index];
        prop_assert_eq!(keypad.handle_click(&button.id), Some(button.event));
        prop_assert_eq!(keypad.find_by_event(button.event).map(|b| b.id.as_str()), Some(button.id.as_str()));
    }

    #[test]
    fn prop_data_key_maps_back_to_button(index in button_index_strategy()) {
        let keypad = WasmKeypad::new();
        let button = &keypad.buttons()[index];
        prop_assert_eq!(keypad.key_to_event(&button.data_key), Some(button.event));
    }

    #[test]
    fn prop_single_character_keys_match_from_char(c in proptest::char::range(' ', '~')) {
        let keypad = WasmKeypad::new();
        if let Some(event) = InputEvent::from_char(c) {
            prop_assert_eq!(keypad.key_to_event(&c.to_string()), Some(event));
        }
    }
}

// ===== Driver properties =====

proptest! {
    #[test]
    fn prop_dom_display_mirrors_controller(keys in script_strategy()) {
        let mut driver = WasmDriver::new();
        driver.press_all(&script(&keys));
        prop_assert_eq!(driver.display_text(), driver.controller().display());
        prop_assert_eq!(driver.dom().text(DISPLAY_ID), Some(driver.controller().display()));
    }

    #[test]
    fn prop_at_most_one_operator_selected(keys in script_strategy()) {
        let mut driver = WasmDriver::new();
        driver.press_all(&script(&keys));
        let selected = driver.dom().ids_with_class(SELECTED_CLASS);
        prop_assert!(selected.len() <= 1);
        prop_assert_eq!(selected.is_empty(), driver.controller().selected_operator().is_none());
    }

    #[test]
    fn prop_key_feedback_expires(keys in script_strategy(), ms in 150u64..1_000u64) {
        let mut driver = WasmDriver::new();
        for event in script(&keys) {
            let key = event.label();
            driver.key_down(&key);
        }
        driver.tick(ms);
        prop_assert!(driver.dom().ids_with_class(ACTIVE_CLASS).is_empty());
    }

    #[test]
    fn prop_dom_and_controller_agree(keys in script_strategy()) {
        let events = script(&keys);
        let mut driver = WasmDriver::new();
        driver.press_all(&events);

        let mut calc = Controller::new();
        calc.dispatch_all(events);
        prop_assert_eq!(CalculatorDriver::display(&driver), calc.display());
    }
}
