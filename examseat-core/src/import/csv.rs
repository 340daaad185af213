//! CSV tables for spreadsheet exports.
//!
//! Reading and writing go through the `csv` crate. Short rows are allowed,
//! fields are trimmed and a leading UTF-8 BOM is dropped. Columns are
//! looked up by header name, ignoring case and surrounding spaces.

use ::csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};

use crate::error::{ImportError, ImportResult};

/// A parsed CSV file: header row plus data records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    source_name: String,
    headers: Vec<String>,
    records: Vec<CsvRecord>,
}

/// One data record with the line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    /// One-based line number of the first line of the record
    pub line: usize,
    /// Raw field values
    pub fields: Vec<String>,
}

impl CsvRecord {
    /// Field at a column position, trimmed; empty when the row is short
    #[must_use]
    pub fn get(&self, column: usize) -> &str {
        self.fields.get(column).map_or("", |field| field.trim())
    }

    /// Returns true when every field is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.trim().is_empty())
    }
}

impl CsvTable {
    /// Parses CSV text; the first non-empty line is the header row
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Parse` when the reader fails or the file has
    /// no header row.
    pub fn parse(content: &str, source_name: &str) -> ImportResult<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let parse_error = |reason: String| ImportError::Parse {
            source_name: source_name.to_string(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| parse_error(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(parse_error("file has no header row".to_string()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| parse_error(e.to_string()))?;
            let record = CsvRecord {
                line: record.position().map_or(0, |pos| pos.line() as usize),
                fields: record.iter().map(str::to_string).collect(),
            };
            if !record.is_blank() {
                records.push(record);
            }
        }

        Ok(Self {
            source_name: source_name.to_string(),
            headers,
            records,
        })
    }

    /// Header names as found in the file
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data records, blank lines removed
    #[must_use]
    pub fn records(&self) -> &[CsvRecord] {
        &self.records
    }

    /// Position of an optional column
    #[must_use]
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name.trim()))
    }

    /// Position of a required column
    ///
    /// # Errors
    ///
    /// Returns `ImportError::MissingColumn` when the header is absent.
    pub fn column(&self, name: &str) -> ImportResult<usize> {
        self.find_column(name)
            .ok_or_else(|| ImportError::MissingColumn {
                source_name: self.source_name.clone(),
                column: name.to_string(),
            })
    }

    /// Builds an `InvalidField` error for a record of this table
    #[must_use]
    pub fn invalid_field(&self, record: &CsvRecord, column: &str, value: &str) -> ImportError {
        ImportError::InvalidField {
            source_name: self.source_name.clone(),
            line: record.line,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

/// Appends one CSV record terminated by a newline.
///
/// Fields containing a separator, quote or line break are quoted.
pub fn write_record<I, S>(output: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    let fields = fields.into_iter().map(|field| field.as_ref().to_string());
    if writer.write_record(fields).is_err() {
        return;
    }
    if let Ok(bytes) = writer.into_inner() {
        output.push_str(&String::from_utf8_lossy(&bytes));
    }
}
