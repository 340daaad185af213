//! Application settings persisted in `settings.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Log level and filter
    pub logging: LoggingSettings,
    /// Report output preferences
    pub output: OutputSettings,
    /// Allocation preferences
    pub allocation: AllocationSettings,
}

/// Logging preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level used when no `-v` flag is given
    pub level: TracingLevel,
    /// Custom `tracing` filter directive, overrides `level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Log file; logs go to stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Builds the tracing configuration, letting a verbosity override win
    #[must_use]
    pub fn tracing_config(&self, level_override: Option<TracingLevel>) -> TracingConfig {
        let mut config = TracingConfig::new().with_level(level_override.unwrap_or(self.level));
        if let Some(path) = &self.file {
            config = config.with_output(TracingOutput::File { path: path.clone() });
        }
        match (&self.filter, level_override) {
            (Some(filter), None) => config.with_filter(filter.clone()),
            _ => config,
        }
    }
}

/// Report rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// JSON document
    Json,
    /// Comma separated values
    Csv,
}

/// Report output preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default report format
    pub format: OutputFormat,
    /// Color seats by paper in grid views
    pub color: bool,
    /// Print the seat grid of every room after allocation
    pub show_grid: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            show_grid: false,
        }
    }
}

/// Allocation preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationSettings {
    /// Sort rooms largest-capacity first before seating
    pub sort_rooms_by_capacity: bool,
}
