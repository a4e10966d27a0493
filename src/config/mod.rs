//! Configuration management for tabwire
//!
//! This module handles loading, parsing, and managing configuration from:
//! - Configuration files (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::script::Shell;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion generation configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion-generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Default target shell when `--shell` is not given
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Request candidate descriptions from host programs
    #[serde(default = "default_descriptions")]
    pub descriptions: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            descriptions: default_descriptions(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the tracing crate's level type.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn default_shell() -> String {
    "fish".to_string()
}

fn default_descriptions() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// When `path` is `None` the default location is used; a missing file
    /// at the default location yields the default configuration, while an
    /// explicitly named file must exist.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(
                    ConfigError::FileNotFound(path.display().to_string()).into()
                );
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabwire")
            .join("config.toml")
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<()> {
        if !Shell::is_known(&self.completion.shell) {
            return Err(ConfigError::InvalidValue {
                field: "completion.shell".to_string(),
                value: self.completion.shell.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.completion.shell, "fish");
        assert!(config.completion.descriptions);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [completion]
            descriptions = false
            "#,
        )
        .unwrap();
        assert!(!config.completion.descriptions);
        // Unspecified fields keep their defaults.
        assert_eq!(config.completion.shell, "fish");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_log_level() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "trace"
            timestamps = true
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert!(config.logging.timestamps);
        assert_eq!(config.logging.level.to_tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_validate_rejects_unknown_shell() {
        let mut config = Config::default();
        config.completion.shell = "tcsh".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_known_unsupported_shell() {
        // Generation for bash fails later with a clear error, but the
        // configuration itself is not invalid.
        let mut config = Config::default();
        config.completion.shell = "bash".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let result = Config::load_from_file(Some(Path::new("/nonexistent/tabwire.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::default();
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load_from_file(Some(&path)).unwrap();
        assert_eq!(loaded.completion.shell, config.completion.shell);
        assert_eq!(loaded.logging.level, config.logging.level);
    }
}
