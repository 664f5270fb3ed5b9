//! Plain-text rendering of the calculator
//!
//! Produces one `String` per terminal row so the same output can be drawn
//! with crossterm or asserted on directly.
//!
//! ```text
//! ┌────────────────────┐
//! │                  0 │
//! ├────────────────────┤
//! │ AC  +/-   %   [/]  │
//! ...
//! └────────────────────┘
//! ```

use super::app::TerminalApp;
use crate::core::InputEvent;
use crate::wasm::KeypadButtonDef;

/// Width of one keypad cell
const CELL_WIDTH: usize = 5;

/// Keys reminder shown under the keypad
pub const HELP_LINE: &str = "Enter = | Esc AC | Bksp C | n +/- | q quit";

/// Renders the calculator as text rows
#[must_use]
pub fn render_lines(app: &TerminalApp) -> Vec<String> {
    let (rows, cols) = app.keypad().dimensions();
    let inner = CELL_WIDTH * cols;
    let display_width = inner - 2;

    let mut lines = Vec::with_capacity(rows + 5);
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    lines.push(format!(
        "│ {:>display_width$} │",
        fit(app.controller().display(), display_width)
    ));
    lines.push(format!("├{}┤", "─".repeat(inner)));

    for row in 0..rows {
        let cells: String = (0..cols)
            .filter_map(|col| app.keypad().button_at(row, col))
            .map(|button| format!("{:^width$}", cell_text(app, button), width = CELL_WIDTH))
            .collect();
        lines.push(format!("│{cells}│"));
    }

    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines.push(HELP_LINE.to_string());
    lines
}

fn cell_text(app: &TerminalApp, button: &KeypadButtonDef) -> String {
    let mut text = match button.event {
        InputEvent::Operator(op) if app.controller().selected_operator() == Some(op) => {
            format!("[{op}]")
        }
        _ => button.label(),
    };
    if app.feedback().is_active(&button.id) {
        text.push('*');
    }
    text
}

/// Keeps the rightmost characters when text is wider than the display
fn fit(text: &str, width: usize) -> &str {
    let len = text.chars().count();
    if len <= width {
        return text;
    }
    let skip = len - width;
    text.char_indices()
        .nth(skip)
        .map_or(text, |(idx, _)| &text[idx..])
}
