//! Settings file commands.

use crate::cli::ConfigCommands;
use crate::error::CliError;

use super::Context;

/// Settings command handler
pub fn cmd_config(context: &Context, subcommand: ConfigCommands) -> Result<(), CliError> {
    match subcommand {
        ConfigCommands::Show => show_settings(context),
        ConfigCommands::Init { force } => init_settings(context, force),
    }
}

fn show_settings(context: &Context) -> Result<(), CliError> {
    let content = toml::to_string_pretty(&context.settings)
        .map_err(|e| CliError::Config(format!("Failed to serialize settings: {e}")))?;
    if !context.quiet {
        println!("# {}", context.config_manager.settings_path().display());
    }
    print!("{content}");
    Ok(())
}

fn init_settings(context: &Context, force: bool) -> Result<(), CliError> {
    let path = context.config_manager.settings_path();
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }

    context
        .config_manager
        .save_settings(&examseat_core::config::AppSettings::default())?;
    if !context.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
