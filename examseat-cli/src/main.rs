//! `ExamSeat` CLI - Command-line interface for examination seat allocation
//!
//! Provides commands for seating one exam session across rooms, estimating
//! the capacity a session needs, listing the sessions in a roster, writing
//! a demo dataset and managing the settings file.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use examseat_core::config::AppSettings;
use examseat_core::tracing::{TracingLevel, init_tracing};

use crate::commands::Context;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_manager = util::create_config_manager(cli.config.as_deref())?;
    let settings = config_manager.load_settings()?;
    init_logging(&settings, cli.verbose, cli.quiet);

    let context = Context {
        config_manager,
        color: settings.output.color && !cli.no_color,
        quiet: cli.quiet,
        settings,
    };
    commands::dispatch(&context, cli.command)
}

fn init_logging(settings: &AppSettings, verbose: u8, quiet: bool) {
    let level_override = if quiet {
        Some(TracingLevel::Error)
    } else {
        TracingLevel::from_verbosity(verbose)
    };
    let config = settings.logging.tracing_config(level_override);
    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: logging disabled: {e}");
    }
}
