//! Locating, loading and saving the settings file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::AppSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::trace_operation;
use crate::tracing::span_names;

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "EXAMSEAT_CONFIG_DIR";

/// Loads and saves [`AppSettings`]
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `$EXAMSEAT_CONFIG_DIR`, or `examseat` under the platform config
    /// directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` when neither is available.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("examseat")))
    }

    /// Uses an explicit configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Configuration directory in use
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the file exists but cannot be read or
    /// parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_path();
        let span = trace_operation!(span_names::CONFIG_LOAD, path = %path.display());
        let _enter = span.enter();

        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            reason: e.to_string(),
        })
    }

    /// Writes settings, creating the configuration directory if needed
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when serialization or writing fails.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let span = trace_operation!(span_names::CONFIG_SAVE, path = %path.display());
        let _enter = span.enter();

        let content =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }
}
