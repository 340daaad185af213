//! Error types for `ExamSeat`
//!
//! Validation failures of the seating core are reported as [`SeatingError`].
//! Loading data files and settings has its own error types so callers can
//! tell a bad input file apart from a bad roster.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type wrapping every error the core can produce
#[derive(Debug, Error)]
pub enum ExamSeatError {
    /// Rejected roster, room or faculty data
    #[error("Invalid input: {0}")]
    Seating(#[from] SeatingError),

    /// Failed to load a data file
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Failed to load or save settings
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plain IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed roster, room or faculty data.
///
/// Every variant is an invalid-input condition detected before allocation
/// (or assignment) starts. Running out of seats is never reported here; it
/// shows up as a positive leftover count instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// A room with zero rows or zero columns
    #[error("Room '{room}' has an empty dimension ({rows}x{cols})")]
    EmptyRoomDimension {
        /// Room name
        room: String,
        /// Declared row count
        rows: u32,
        /// Declared column count
        cols: u32,
    },

    /// A room with more seats than a grid may hold
    #[error("Room '{room}' is too large ({rows}x{cols}, at most {max} seats)")]
    RoomTooLarge {
        /// Room name
        room: String,
        /// Declared row count
        rows: u32,
        /// Declared column count
        cols: u32,
        /// Largest accepted capacity
        max: u64,
    },

    /// A room without a name
    #[error("Room at position {index} has a blank name")]
    BlankRoomName {
        /// Zero-based position in the room list
        index: usize,
    },

    /// Two rooms share a name
    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),

    /// A roster entry without an identifier
    #[error("Roster entry at position {index} has a blank roll number")]
    BlankStudentId {
        /// Zero-based position in the roster
        index: usize,
    },

    /// A roster entry without a paper code
    #[error("Student '{student}' has a blank paper code")]
    BlankPaperCode {
        /// Roll number of the offending entry
        student: String,
    },

    /// The same roll number listed twice
    #[error("Duplicate roll number: {0}")]
    DuplicateStudent(String),

    /// A faculty entry without a name
    #[error("Invigilator at position {index} has a blank name")]
    BlankInvigilatorName {
        /// Zero-based position in the duty ledger
        index: usize,
    },

    /// Two faculty entries share a name
    #[error("Duplicate invigilator: {0}")]
    DuplicateInvigilator(String),

    /// Rooms need supervising but the duty ledger is empty
    #[error("No invigilators available for {rooms} room(s)")]
    NoInvigilators {
        /// Number of rooms left without a supervisor
        rooms: usize,
    },
}

impl SeatingError {
    /// Returns true for every variant.
    ///
    /// Kept as a method so callers can classify errors without matching on
    /// the full variant list.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyRoomDimension { .. }
                | Self::RoomTooLarge { .. }
                | Self::BlankRoomName { .. }
                | Self::DuplicateRoom(_)
                | Self::BlankStudentId { .. }
                | Self::BlankPaperCode { .. }
                | Self::DuplicateStudent(_)
                | Self::BlankInvigilatorName { .. }
                | Self::DuplicateInvigilator(_)
                | Self::NoInvigilators { .. }
        )
    }
}

/// Errors raised while reading student, room or faculty files
#[derive(Debug, Error)]
pub enum ImportError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("{source_name}: missing required column '{column}'")]
    MissingColumn {
        /// Human-readable name of the input (e.g. "rooms")
        source_name: String,
        /// Column header that was expected
        column: String,
    },

    /// A field could not be converted to the expected type
    #[error("{source_name} line {line}: invalid {column} value '{value}'")]
    InvalidField {
        /// Human-readable name of the input
        source_name: String,
        /// One-based line number in the file
        line: usize,
        /// Column header of the field
        column: String,
        /// Raw field text
        value: String,
    },

    /// Structural parse failure (bad quoting, malformed JSON, ...)
    #[error("{source_name}: {reason}")]
    Parse {
        /// Human-readable name of the input
        source_name: String,
        /// Description of the failure
        reason: String,
    },

    /// File extension not recognised
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to settings files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read or written
    #[error("Failed to access {path}: {source}")]
    Io {
        /// Settings file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::config::AppSettings`]
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// No platform config directory and none given explicitly
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Result type alias for seating operations
pub type SeatingResult<T> = std::result::Result<T, SeatingError>;

/// Result type alias for import operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
