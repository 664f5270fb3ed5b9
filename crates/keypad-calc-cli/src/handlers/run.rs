//! Run command handler

use std::io::Write;

use keypad_calc::tui::{self, TerminalApp};
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the run command.
///
/// Takes over the terminal until the user quits, then prints the last
/// display unless quiet.
pub fn execute_run<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    let mut app = TerminalApp::with_config(config.calculator);
    info!(max_digits = config.calculator.max_digits, "starting terminal calculator");

    tui::run(&mut app)?;

    if !config.verbosity.is_quiet() {
        writeln!(out, "{}", app.controller().display())?;
    }
    Ok(())
}
