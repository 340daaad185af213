//! Command handler modules for the CLI.

mod allocate;
mod completions;
mod config;
mod estimate;
mod sample;
mod sessions;

use examseat_core::config::{AppSettings, ConfigManager};

use crate::cli::Commands;
use crate::error::CliError;

/// Settings and global flags shared by every command
pub struct Context {
    /// Manager for the resolved configuration directory
    pub config_manager: ConfigManager,
    /// Settings loaded from `settings.toml`
    pub settings: AppSettings,
    /// Whether ANSI colors may be written
    pub color: bool,
    /// Whether warnings and progress messages are suppressed
    pub quiet: bool,
}

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(context: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Allocate {
            students,
            rooms,
            faculty,
            date,
            time,
            sort_rooms,
            format,
            output,
            show_grid,
        } => allocate::cmd_allocate(
            context,
            &allocate::AllocateParams {
                students: &students,
                rooms: &rooms,
                faculty: faculty.as_deref(),
                date: date.as_deref(),
                time: time.as_deref(),
                sort_rooms,
                format,
                output: output.as_deref(),
                show_grid,
            },
        ),
        Commands::Estimate {
            students,
            rooms,
            date,
            time,
            format,
        } => estimate::cmd_estimate(&students, &rooms, date.as_deref(), time.as_deref(), format),
        Commands::Sessions { students, format } => sessions::cmd_sessions(&students, format),
        Commands::Sample { output, force } => sample::cmd_sample(context, &output, force),
        Commands::Config(subcommand) => config::cmd_config(context, subcommand),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
