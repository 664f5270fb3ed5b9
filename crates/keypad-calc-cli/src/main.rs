//! Keypad calculator command-line entry point

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calc_cli::{handlers, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_tracing(config.verbosity, &cli.log_level);

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Run => handlers::execute_run(&config, &mut stdout),
        Commands::Press(args) => handlers::execute_press(&config, &args, &mut stdout),
        Commands::Eval(args) => handlers::execute_eval(&config, &args, &mut stdout),
        Commands::Config(args) => handlers::execute_config(&config, &args, &mut stdout),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    let config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .load_calculator(cli.config.as_deref())?;
    Ok(config)
}

/// Logs go to stderr so command output stays pipeable
fn init_tracing(verbosity: Verbosity, log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive(log_level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}
