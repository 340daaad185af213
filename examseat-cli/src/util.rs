//! Shared utility functions used across command modules.

use std::fs;
use std::path::Path;

use examseat_core::config::ConfigManager;
use examseat_core::import::load_students;
use examseat_core::models::{Room, RosterEntry};
use examseat_core::session::{filter_session, list_sessions};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads a roster and narrows it to one exam session.
///
/// With `--date` and `--time` the matching entries are kept. Without them
/// the roster must hold a single session.
pub fn load_session_roster(
    path: &Path,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<Vec<RosterEntry>, CliError> {
    let roster = load_students(path)?;

    if let (Some(date), Some(time)) = (date, time) {
        let selected = filter_session(&roster, date, time);
        if selected.is_empty() && !roster.is_empty() {
            return Err(CliError::Session(format!(
                "No students scheduled for {date} {time}"
            )));
        }
        return Ok(selected);
    }

    let sessions = list_sessions(&roster);
    if sessions.len() > 1 {
        let names: Vec<String> = sessions.iter().map(ToString::to_string).collect();
        return Err(CliError::Session(format!(
            "Roster spans {} sessions ({}); choose one with --date and --time",
            sessions.len(),
            names.join(", ")
        )));
    }
    Ok(roster)
}

/// Orders rooms largest capacity first, keeping file order among equals
pub fn sort_rooms_by_capacity(rooms: &mut [Room]) {
    rooms.sort_by(|a, b| b.capacity().cmp(&a.capacity()));
}

/// Writes rendered output to a file, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let mut content = content.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            fs::write(path, content).map_err(|e| {
                CliError::Output(format!("Failed to write {}: {e}", path.display()))
            })
        }
        None => {
            println!("{}", content.trim_end());
            Ok(())
        }
    }
}
