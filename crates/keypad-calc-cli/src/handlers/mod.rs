//! Command handlers, kept out of main.rs for testability
//!
//! Handlers write their primary output to a caller-supplied writer; logs go
//! through `tracing` to stderr.

pub mod config;
pub mod eval;
pub mod press;
pub mod run;

pub use config::{execute_config, render_config};
pub use eval::{evaluate_args, execute_eval};
pub use press::{expand_keys, execute_press, press_keys, PressStep};
pub use run::execute_run;

/// Applies `style` when color output is enabled
fn paint(text: &str, use_color: bool, style: &console::Style) -> String {
    if use_color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}
