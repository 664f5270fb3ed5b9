//! Terminal frontend
//!
//! crossterm key events go through [`InputHandler`]; the screen is the text
//! produced by [`render_lines`].

mod app;
mod input;
mod render;
mod terminal;

pub use app::TerminalApp;
pub use input::{InputHandler, KeyAction};
pub use render::{render_lines, HELP_LINE};
pub use terminal::{draw, run};
