//! CLI error types and exit codes.

use examseat_core::error::{ConfigError, ImportError, SeatingError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, import, output or session selection
    pub const GENERAL_ERROR: i32 = 1;
    /// Input rejected by the allocator before seating
    pub const INVALID_INPUT: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data file could not be loaded
    #[error("Import error: {0}")]
    Import(String),

    /// Rooms, roster or faculty failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No single session could be selected
    #[error("Session error: {0}")]
    Session(String),

    /// Report could not be rendered or written
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SeatingError> for CliError {
    fn from(err: SeatingError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<ImportError> for CliError {
    fn from(err: ImportError) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success, including runs that leave students unseated
    /// - 1: General error (configuration, import, session, output, IO)
    /// - 2: Invalid input rejected by the allocator
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            Self::Config(_) | Self::Import(_) | Self::Session(_) | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
