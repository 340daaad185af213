//! Loading students, rooms and faculty from data files
//!
//! CSV files use the spreadsheet column headers (`RollNo`, `PaperCode`,
//! `ExamDate`, `ExamTime`; `RoomName`, `Rows`, `Cols`; `Name`,
//! `DutiesDone`). JSON files hold an array of the same records. The format
//! is chosen by file extension.
//!
//! Import only checks that fields are present and well-typed. Semantic
//! checks (duplicate rooms, blank paper codes, ...) belong to the
//! allocator, which runs them before seating.

pub mod csv;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ImportError, ImportResult};
use crate::models::{Invigilator, Room, RosterEntry};
use crate::trace_operation;
use crate::tracing::span_names;

pub use self::csv::{CsvRecord, CsvTable, write_record};

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Comma separated values with a header row
    Csv,
    /// JSON array of records
    Json,
}

impl ImportFormat {
    /// Picks the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns `ImportError::UnsupportedFormat` for other extensions.
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads a data file with consistent error handling.
///
/// # Errors
///
/// Returns `ImportError::Io` if the file cannot be read.
pub fn read_import_file(path: &Path) -> ImportResult<String> {
    fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a student roster from a CSV or JSON file
///
/// # Errors
///
/// Returns an `ImportError` when the file cannot be read or parsed.
pub fn load_students(path: &Path) -> ImportResult<Vec<RosterEntry>> {
    load_with(path, "students", parse_students_csv)
}

/// Loads a room list from a CSV or JSON file, keeping file order
///
/// # Errors
///
/// Returns an `ImportError` when the file cannot be read or parsed.
pub fn load_rooms(path: &Path) -> ImportResult<Vec<Room>> {
    load_with(path, "rooms", parse_rooms_csv)
}

/// Loads a faculty duty list from a CSV or JSON file
///
/// # Errors
///
/// Returns an `ImportError` when the file cannot be read or parsed.
pub fn load_faculty(path: &Path) -> ImportResult<Vec<Invigilator>> {
    load_with(path, "faculty", parse_faculty_csv)
}

fn load_with<T, F>(path: &Path, source_name: &str, parse_csv: F) -> ImportResult<Vec<T>>
where
    T: DeserializeOwned,
    F: FnOnce(&str) -> ImportResult<Vec<T>>,
{
    let span = trace_operation!(
        span_names::IMPORT_EXECUTE,
        source = source_name,
        path = %path.display()
    );
    let _enter = span.enter();

    let format = ImportFormat::from_path(path)?;
    let content = read_import_file(path)?;
    let items = match format {
        ImportFormat::Csv => parse_csv(&content)?,
        ImportFormat::Json => parse_json(&content, source_name)?,
    };
    debug!(count = items.len(), "Records imported");
    Ok(items)
}

/// Parses a JSON array of records
///
/// # Errors
///
/// Returns `ImportError::Parse` for malformed JSON.
pub fn parse_json<T: DeserializeOwned>(content: &str, source_name: &str) -> ImportResult<Vec<T>> {
    serde_json::from_str(content).map_err(|e| ImportError::Parse {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a student CSV export.
///
/// Empty `ExamDate` / `ExamTime` cells leave the entry unscheduled.
///
/// # Errors
///
/// Returns an `ImportError` when `RollNo` or `PaperCode` is missing.
pub fn parse_students_csv(content: &str) -> ImportResult<Vec<RosterEntry>> {
    let table = CsvTable::parse(content, "students")?;
    let roll_col = table.column("RollNo")?;
    let paper_col = table.column("PaperCode")?;
    let date_col = table.find_column("ExamDate");
    let time_col = table.find_column("ExamTime");

    let optional = |record: &CsvRecord, col: Option<usize>| {
        col.map(|c| record.get(c))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    Ok(table
        .records()
        .iter()
        .map(|record| RosterEntry {
            roll_no: record.get(roll_col).to_string(),
            paper_code: record.get(paper_col).to_string(),
            exam_date: optional(record, date_col),
            exam_time: optional(record, time_col),
        })
        .collect())
}

/// Parses a room CSV export
///
/// # Errors
///
/// Returns an `ImportError` when a column is missing or `Rows` / `Cols` is
/// not a non-negative integer.
pub fn parse_rooms_csv(content: &str) -> ImportResult<Vec<Room>> {
    let table = CsvTable::parse(content, "rooms")?;
    let name_col = table.column("RoomName")?;
    let rows_col = table.column("Rows")?;
    let cols_col = table.column("Cols")?;

    table
        .records()
        .iter()
        .map(|record| {
            let rows = parse_count(&table, record, rows_col, "Rows")?;
            let cols = parse_count(&table, record, cols_col, "Cols")?;
            Ok(Room::new(record.get(name_col), rows, cols))
        })
        .collect()
}

/// Parses a faculty CSV export; a missing `DutiesDone` column means 0
///
/// # Errors
///
/// Returns an `ImportError` when `Name` is missing or `DutiesDone` is not a
/// non-negative integer.
pub fn parse_faculty_csv(content: &str) -> ImportResult<Vec<Invigilator>> {
    let table = CsvTable::parse(content, "faculty")?;
    let name_col = table.column("Name")?;
    let duties_col = table.find_column("DutiesDone");

    table
        .records()
        .iter()
        .map(|record| {
            let duties = match duties_col {
                Some(col) if !record.get(col).is_empty() => {
                    parse_count(&table, record, col, "DutiesDone")?
                }
                _ => 0,
            };
            Ok(Invigilator::new(record.get(name_col), duties))
        })
        .collect()
}

fn parse_count(
    table: &CsvTable,
    record: &CsvRecord,
    col: usize,
    column: &str,
) -> ImportResult<u32> {
    let raw = record.get(col);
    raw.parse::<u32>()
        .map_err(|_| table.invalid_field(record, column, raw))
}
