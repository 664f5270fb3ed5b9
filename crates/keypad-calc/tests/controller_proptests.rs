//! Property-based tests for the input/display controller

#![allow(clippy::unwrap_used)]

use keypad_calc::core::display::DEFAULT_MAX_DIGITS;
use keypad_calc::prelude::*;
use proptest::prelude::*;

/// `-d.ddddde-ddd` with the default five fraction digits
const MAX_EXPONENTIAL_LEN: usize = 13;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(InputEvent::Digit),
        1 => Just(InputEvent::Decimal),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Modifier(Modifier::ToggleSign)),
        1 => Just(InputEvent::Modifier(Modifier::Percent)),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::AllClear),
    ]
}

fn events_strategy() -> impl Strategy<Value = Vec<InputEvent>> {
    prop::collection::vec(event_strategy(), 0..40)
}

fn controller_after(events: &[InputEvent]) -> Controller {
    let mut calc = Controller::new();
    calc.dispatch_all(events.iter().copied());
    calc
}

fn is_error_text(text: &str) -> bool {
    text == CalcError::DivisionByZero.display_text() || text == CalcError::InvalidOperand.display_text()
}

// ===== Display invariants =====

proptest! {
    #[test]
    fn prop_typed_digits_never_exceed_cap(digits in prop::collection::vec(digit_strategy(), 0..30)) {
        let mut calc = Controller::new();
        for d in digits {
            calc.dispatch(InputEvent::Digit(d));
            prop_assert!(calc.display().chars().count() <= DEFAULT_MAX_DIGITS);
        }
    }

    #[test]
    fn prop_display_within_cap_or_error(events in events_strategy()) {
        let mut calc = Controller::new();
        for event in events {
            calc.dispatch(event);
            let text = calc.display();
            let len = text.chars().count();
            prop_assert!(
                is_error_text(text)
                    || len <= DEFAULT_MAX_DIGITS
                    || (text.contains('e') && len <= MAX_EXPONENTIAL_LEN),
                "display {text:?} after {event:?}"
            );
        }
    }

    #[test]
    fn prop_at_most_one_decimal_point(events in events_strategy()) {
        let calc = controller_after(&events);
        prop_assert!(calc.display().matches('.').count() <= 1);
    }

    #[test]
    fn prop_decimal_twice_is_idempotent(events in events_strategy()) {
        let mut calc = controller_after(&events);
        calc.dispatch(InputEvent::Decimal);
        let once = calc.display().to_string();
        calc.dispatch(InputEvent::Decimal);
        prop_assert_eq!(calc.display(), once.as_str());
        prop_assert!(calc.display().matches('.').count() <= 1);
    }

    #[test]
    fn prop_display_empty_only_after_operator(events in events_strategy()) {
        let mut calc = Controller::new();
        for event in events {
            calc.dispatch(event);
            if calc.display().is_empty() {
                prop_assert!(calc.state().pending_operator.is_some());
            }
        }
    }
}

// ===== Reset invariants =====

proptest! {
    #[test]
    fn prop_all_clear_restores_initial_state(events in events_strategy()) {
        let mut calc = controller_after(&events);
        calc.dispatch(InputEvent::AllClear);
        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(*calc.state(), CalculatorState::default());
        prop_assert!(calc.error().is_none());
        prop_assert!(calc.selected_operator().is_none());
    }

    #[test]
    fn prop_digit_always_clears_error(events in events_strategy(), d in digit_strategy()) {
        let mut calc = controller_after(&events);
        calc.dispatch(InputEvent::Digit(d));
        prop_assert!(calc.error().is_none());
    }
}

// ===== Arithmetic through the keypad =====

proptest! {
    #[test]
    fn prop_single_digit_operations(a in 1u8..=9u8, b in 0u8..=9u8, op in operator_strategy()) {
        let calc = controller_after(&[
            InputEvent::Digit(a),
            InputEvent::Operator(op),
            InputEvent::Digit(b),
            InputEvent::Equals,
        ]);

        match evaluate(f64::from(a), f64::from(b), op) {
            Ok(value) => {
                prop_assert_eq!(calc.display(), format_value(value, DEFAULT_MAX_DIGITS, 5));
                prop_assert_eq!(calc.state().first_operand, Some(value));
            }
            Err(err) => prop_assert_eq!(calc.display(), err.display_text()),
        }
    }

    #[test]
    fn prop_divide_by_zero_always_reported(a in 1u8..=9u8) {
        let calc = controller_after(&[
            InputEvent::Digit(a),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(0),
            InputEvent::Equals,
        ]);
        prop_assert_eq!(calc.display(), "Cannot divide by 0");
    }

    #[test]
    fn prop_toggle_sign_twice_is_identity(digits in prop::collection::vec(1u8..=9u8, 1..9)) {
        let mut calc = Controller::new();
        calc.dispatch_all(digits.iter().copied().map(InputEvent::Digit));
        let before = calc.display().to_string();
        calc.dispatch(InputEvent::Modifier(Modifier::ToggleSign));
        calc.dispatch(InputEvent::Modifier(Modifier::ToggleSign));
        prop_assert_eq!(calc.display(), before.as_str());
    }
}
