use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{CaltrackError, Result};

/// Environment variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "CALTRACK_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Entries kept for the in-app logs screen
    #[serde(default = "default_log_buffer_capacity")]
    pub log_buffer_capacity: usize,

    /// Where log files go; defaults to `<config dir>/caltrack/logs`
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_buffer_capacity() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_buffer_capacity: default_log_buffer_capacity(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load from the optional settings file, then `CALTRACK__*` overrides
    pub fn new() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "caltrack.toml".to_string());
        Self::from_path(&config_path)
    }

    pub fn from_path(config_path: &str) -> Result<Self> {
        Self::from_sources(config_path, Environment::with_prefix("CALTRACK").separator("__"))
    }

    fn from_sources(config_path: &str, environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(environment)
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(CaltrackError::Configuration(
                "log_level must not be empty".to_string(),
            ));
        }
        if self.log_buffer_capacity == 0 {
            return Err(CaltrackError::Configuration(
                "log_buffer_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
