//! Configuration management for the logging outputs
//!
//! The outputs built by `create_output` always use the fixed defaults below.
//! A `LogConfig` is an optional way to point them elsewhere, loaded from a
//! TOML file with optional environment overrides. Only the file-backed
//! outputs have settings; the console output needs none.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the text log path
pub const ENV_FILE_PATH: &str = "SWITCHLOG_FILE_PATH";
/// Environment variable overriding the structured log path
pub const ENV_JSON_PATH: &str = "SWITCHLOG_JSON_PATH";

/// Main logging configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Output-specific configurations
    #[serde(default)]
    pub outputs: OutputsConfig,
}

/// Configuration for all file-backed output types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputsConfig {
    /// Plain text file output configuration
    #[serde(default)]
    pub file: FileConfig,
    /// Structured JSON output configuration
    #[serde(default)]
    pub structured: StructuredConfig,
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Log file path
    pub path: PathBuf,
}

/// Structured JSON output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredConfig {
    /// JSON array file path
    pub path: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("app.log"),
        }
    }
}

impl Default for StructuredConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("logs.json"),
        }
    }
}

impl FileConfig {
    /// Reject an empty log file path
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("outputs.file.path".to_string()));
        }
        Ok(())
    }
}

impl StructuredConfig {
    /// Reject an empty JSON array file path
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("outputs.structured.path".to_string()));
        }
        Ok(())
    }
}

impl LogConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;

        let mut config: LogConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        // Apply environment variable overrides
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(std::env::vars());
    }

    /// Apply overrides from key/value pairs using the environment variable names
    pub fn apply_overrides<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            match key.as_ref() {
                ENV_FILE_PATH => self.outputs.file.path = PathBuf::from(value.into()),
                ENV_JSON_PATH => self.outputs.structured.path = PathBuf::from(value.into()),
                _ => {}
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.outputs.file.validate()?;
        self.outputs.structured.validate()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
    #[error("Empty path for '{0}'")]
    EmptyPath(String),
}
