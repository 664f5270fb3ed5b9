//! Keypad Calculator CLI Library
//!
//! Command-line interface for the keypad calculator: an interactive terminal
//! keypad plus scriptable `press`, `eval` and `config` commands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, ConfigFormat, EvalArgs, PressArgs, PressFormat,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
