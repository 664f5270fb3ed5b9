//! CLI command definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Keypad calculator
#[derive(Parser, Debug)]
#[command(name = "keypad-calc", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Calculator config file (JSON or YAML)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal calculator
    Run,

    /// Feed key presses and print the display
    Press(PressArgs),

    /// Evaluate `A OP B` directly
    Eval(EvalArgs),

    /// Print the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key names (`7`, `+`, `Enter`, `Escape`, `Backspace`) or runs of
    /// single-character keys such as `12+7=`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: PressFormat,
}

/// Output format for the press command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressFormat {
    /// Display text only
    #[default]
    Text,
    /// Controller snapshot as JSON
    Json,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Left operand
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Operator symbol (`+`, `-`, `*`, `/`)
    pub op: String,

    /// Right operand
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ConfigFormat,
}

/// Output format for the config command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Color argument
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
