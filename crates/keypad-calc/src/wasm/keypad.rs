//! Keypad layout and DOM key mapping
//!
//! Layout:
//! ```text
//! [AC ] [+/-] [ % ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ C ] [ = ]
//! ```

use super::dom::{DomElement, MockDom};
use crate::core::{InputEvent, Modifier, Operator};

/// Id of the display element
pub const DISPLAY_ID: &str = "display";

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// Event produced by this button
    pub event: InputEvent,
    /// DOM element id
    pub id: String,
    /// Keyboard key that also triggers this button (`data-key`)
    pub data_key: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a button at the given grid position
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        let id = match event {
            InputEvent::Digit(d) => format!("btn-{d}"),
            InputEvent::Decimal => "btn-decimal".to_string(),
            InputEvent::Operator(op) => format!("btn-{}", op.name()),
            InputEvent::Equals => "btn-equals".to_string(),
            InputEvent::Modifier(Modifier::ToggleSign) => "btn-sign".to_string(),
            InputEvent::Modifier(Modifier::Percent) => "btn-percent".to_string(),
            InputEvent::Clear => "btn-clear".to_string(),
            InputEvent::AllClear => "btn-all-clear".to_string(),
        };
        let data_key = match event {
            InputEvent::Equals => "Enter".to_string(),
            InputEvent::Clear => "Backspace".to_string(),
            InputEvent::AllClear => "Escape".to_string(),
            other => other.label(),
        };
        Self {
            event,
            id,
            data_key,
            row,
            col,
        }
    }

    /// Button caption
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// DOM `data-type`
    #[must_use]
    pub fn data_type(&self) -> &'static str {
        self.event.kind()
    }

    /// True when this button is triggered by `key` (caption or `data-key`)
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.data_key == key || self.label() == key
    }

    /// Renders the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.label())
            .with_class("key")
            .with_class(&format!("key--{}", self.data_type()))
            .with_attr("data-type", self.data_type())
            .with_attr("data-key", &self.data_key)
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard 5x4 keypad
    #[must_use]
    pub fn new() -> Self {
        use InputEvent::{AllClear, Clear, Decimal, Digit, Equals};

        let layout: [[InputEvent; 4]; 5] = [
            [
                AllClear,
                InputEvent::Modifier(Modifier::ToggleSign),
                InputEvent::Modifier(Modifier::Percent),
                InputEvent::Operator(Operator::Divide),
            ],
            [Digit(7), Digit(8), Digit(9), InputEvent::Operator(Operator::Multiply)],
            [Digit(4), Digit(5), Digit(6), InputEvent::Operator(Operator::Subtract)],
            [Digit(1), Digit(2), Digit(3), InputEvent::Operator(Operator::Add)],
            [Digit(0), Decimal, Clear, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButtonDef::new(*event, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Button with the given element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button producing the given event
    #[must_use]
    pub fn find_by_event(&self, event: InputEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Button triggered by a DOM key name
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.matches_key(key))
    }

    /// Operator buttons
    pub fn operator_buttons(&self) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons
            .iter()
            .filter(|b| matches!(b.event, InputEvent::Operator(_)))
    }

    /// Maps a click on `element_id` to its event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_by_id(element_id).map(|b| b.event)
    }

    /// Maps a DOM key name to its event.
    ///
    /// `Enter` and `=` compute, `Escape` resets, `Backspace` deletes.
    #[must_use]
    pub fn key_to_event(&self, key: &str) -> Option<InputEvent> {
        self.find_by_key(key).map(|b| b.event)
    }

    /// Builds a document holding the display and every button
    #[must_use]
    pub fn build_dom(&self) -> MockDom {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("calculator__display")
                .with_text("0"),
        );
        for button in &self.buttons {
            dom.register_element(button.to_element());
        }
        dom
    }
}
