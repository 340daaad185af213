//! Configuration management for `ExamSeat`
//!
//! This module provides the `ConfigManager` for loading and saving the
//! settings file in TOML format.

mod manager;
pub mod settings;

pub use manager::{CONFIG_DIR_ENV, ConfigManager, SETTINGS_FILE};
pub use settings::{AllocationSettings, AppSettings, LoggingSettings, OutputFormat, OutputSettings};
