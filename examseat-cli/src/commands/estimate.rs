//! Capacity estimate command.

use std::path::Path;

use examseat_core::estimate::estimate_capacity;
use examseat_core::import::load_rooms;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_estimate_csv, format_estimate_table, to_json};
use crate::util::load_session_roster;

/// Estimate command handler
pub fn cmd_estimate(
    students: &Path,
    rooms: &Path,
    date: Option<&str>,
    time: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let roster = load_session_roster(students, date, time)?;
    let rooms = load_rooms(rooms)?;
    let estimate = estimate_capacity(&roster, &rooms);

    match format {
        OutputFormat::Table => println!("{}", format_estimate_table(&estimate)),
        OutputFormat::Json => println!("{}", to_json(&estimate)?),
        OutputFormat::Csv => print!("{}", format_estimate_csv(&estimate)),
    }
    Ok(())
}
