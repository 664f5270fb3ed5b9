//! Press command handler

use std::io::Write;

use console::Style;
use keypad_calc::core::ControllerSnapshot;
use keypad_calc::wasm::{WasmDriver, WasmKeypad};
use serde::Serialize;
use tracing::{debug, warn};

use super::paint;
use crate::commands::{PressArgs, PressFormat};
use crate::config::CliConfig;
use crate::error::CliResult;

/// One key press and the state it left behind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressStep {
    /// Key name as pressed
    pub key: String,
    /// Controller state after the press
    #[serde(flatten)]
    pub snapshot: ControllerSnapshot,
}

/// Splits arguments into key names.
///
/// An argument naming a button is kept whole; any other multi-character
/// argument is a run of single-character keys.
#[must_use]
pub fn expand_keys(keypad: &WasmKeypad, args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            if keypad.find_by_key(arg).is_some() || arg.chars().count() <= 1 {
                vec![arg.clone()]
            } else {
                arg.chars().map(String::from).collect()
            }
        })
        .collect()
}

/// Presses `keys` on a fresh keypad, recording every step
pub fn press_keys(config: &CliConfig, keys: &[String]) -> (WasmDriver, Vec<PressStep>) {
    let mut driver = WasmDriver::with_config(config.calculator);
    let keys = expand_keys(driver.keypad(), keys);
    let mut steps = Vec::with_capacity(keys.len());

    for key in keys {
        match driver.key_down(&key) {
            Some(event) => debug!(key = key.as_str(), ?event, "pressed"),
            None => warn!(key = key.as_str(), "no button for key"),
        }
        driver.tick(config.calculator.press_feedback_ms);
        steps.push(PressStep {
            key,
            snapshot: driver.controller().snapshot(),
        });
    }

    (driver, steps)
}

/// Execute the press command
pub fn execute_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let (driver, steps) = press_keys(config, &args.keys);
    let use_color = config.color.should_color();

    match (args.format, args.trace) {
        (PressFormat::Text, false) => {
            let style = display_style(driver.controller().error().is_some());
            writeln!(out, "{}", paint(driver.display_text(), use_color, &style))?;
        }
        (PressFormat::Text, true) => {
            let key_style = Style::new().dim();
            for step in &steps {
                let style = display_style(step.snapshot.error.is_some());
                writeln!(
                    out,
                    "{} {}",
                    paint(&format!("{:>9}", step.key), use_color, &key_style),
                    paint(&step.snapshot.display, use_color, &style)
                )?;
            }
        }
        (PressFormat::Json, false) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&driver.controller().snapshot())?)?;
        }
        (PressFormat::Json, true) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&steps)?)?;
        }
    }

    Ok(())
}

fn display_style(is_error: bool) -> Style {
    if is_error {
        Style::new().red().bold()
    } else {
        Style::new().green().bold()
    }
}
