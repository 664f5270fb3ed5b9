//! Config command handler

use std::io::Write;

use keypad_calc::config::CalculatorConfig;

use crate::commands::{ConfigArgs, ConfigFormat};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Renders calculator settings in a format `--config` reads back
pub fn render_config(calculator: &CalculatorConfig, format: ConfigFormat) -> CliResult<String> {
    let text = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(calculator)?,
        ConfigFormat::Yaml => serde_yaml_ng::to_string(calculator)?,
    };
    Ok(text)
}

/// Execute the config command
pub fn execute_config<W: Write>(config: &CliConfig, args: &ConfigArgs, out: &mut W) -> CliResult<()> {
    let text = render_config(&config.calculator, args.format)?;
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}
