//! List exam sessions command.

use std::path::Path;

use examseat_core::import::load_students;
use examseat_core::session::list_sessions;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_sessions_csv, format_sessions_table, to_json};

/// List sessions command handler
pub fn cmd_sessions(students: &Path, format: OutputFormat) -> Result<(), CliError> {
    let roster = load_students(students)?;
    let sessions = list_sessions(&roster);

    match format {
        OutputFormat::Table => println!("{}", format_sessions_table(&sessions)),
        OutputFormat::Json => println!("{}", to_json(&sessions)?),
        OutputFormat::Csv => print!("{}", format_sessions_csv(&sessions)),
    }
    Ok(())
}
