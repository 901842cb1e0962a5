//! Configuration module for Civiplan.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, and defaults. Configuration is owned by
//! the calling layer and passed in explicitly; nothing in the core reads
//! globals.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::schedule::Urgency;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read or written
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for the expected schema
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration loaded but failed validation
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration for Civiplan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub snapshot: SnapshotConfig,
    pub detection: DetectionConfig,
    pub timeline: TimelineConfig,
    pub logging: LoggingConfig,
}

/// Snapshot source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to the document-store export read by the CLI.
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("snapshot.json"),
        }
    }
}

/// Conflict detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Whether detection passes also check resource overallocation.
    pub include_resources: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            include_resources: true,
        }
    }
}

/// Timeline urgency band settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Days ahead within which a due date counts as "due soon".
    pub due_soon_days: i64,
    /// Days ahead within which a due date counts as "this week".
    pub this_week_days: i64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            due_soon_days: Urgency::DUE_SOON_DAYS,
            this_week_days: Urgency::THIS_WEEK_DAYS,
        }
    }
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the conventional config file location
    ///
    /// `$XDG_CONFIG_HOME/civiplan/config.yaml`, falling back to the
    /// current directory when no config dir is available.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("civiplan")
            .join("config.yaml")
    }

    /// Loads and validates configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the given path if set, the default path if it exists,
    /// otherwise falls back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Writes the configuration to a YAML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validates field values and cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        if self.timeline.due_soon_days < 0 || self.timeline.this_week_days < 0 {
            return Err(ConfigError::Invalid(
                "timeline bands must be non-negative".to_string(),
            ));
        }
        if self.timeline.due_soon_days > self.timeline.this_week_days {
            return Err(ConfigError::Invalid(format!(
                "due_soon_days ({}) must not exceed this_week_days ({})",
                self.timeline.due_soon_days, self.timeline.this_week_days
            )));
        }

        Ok(())
    }
}
