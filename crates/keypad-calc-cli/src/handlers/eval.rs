//! Eval command handler

use std::io::Write;

use console::Style;
use keypad_calc::config::CalculatorConfig;
use keypad_calc::core::{evaluate_with_precision, format_value, Operator};
use tracing::debug;

use super::paint;
use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Evaluates `a op b` and formats the result for the display
pub fn evaluate_args(calculator: &CalculatorConfig, args: &EvalArgs) -> CliResult<String> {
    let op = Operator::from_symbol(&args.op)
        .ok_or_else(|| CliError::invalid_argument(format!("unknown operator '{}'", args.op)))?;

    let value = evaluate_with_precision(args.a, args.b, op, calculator.precision_digits)?;
    debug!(a = args.a, %op, b = args.b, value, "evaluated");

    Ok(format_value(
        value,
        calculator.max_digits,
        calculator.exponent_fraction_digits,
    ))
}

/// Execute the eval command.
///
/// A calculator error is printed the way the display shows it before being
/// returned.
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let use_color = config.color.should_color();

    match evaluate_args(&config.calculator, args) {
        Ok(text) => {
            writeln!(out, "{}", paint(&text, use_color, &Style::new().green().bold()))?;
            Ok(())
        }
        Err(CliError::Evaluation(err)) => {
            writeln!(
                out,
                "{}",
                paint(err.display_text(), use_color, &Style::new().red().bold())
            )?;
            Err(CliError::Evaluation(err))
        }
        Err(err) => Err(err),
    }
}
