//! Terminal key mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{InputEvent, Modifier};

/// What a key press asks the terminal app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Input(InputEvent),
    /// Leave the application
    Quit,
    /// Ignored key
    None,
}

/// Maps crossterm key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Input(InputEvent::AllClear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('n' | '_') => KeyAction::Input(InputEvent::Modifier(Modifier::ToggleSign)),
            KeyCode::Char(c) => InputEvent::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Enter => KeyAction::Input(InputEvent::Equals),
            KeyCode::Esc => KeyAction::Input(InputEvent::AllClear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Input(InputEvent::Clear),
            _ => KeyAction::None,
        }
    }
}
