//! # Logging
//!
//! The [`Logger`] formats leveled messages and delegates each formatted line to
//! a single active [`LogOutput`]. The output can be replaced at any time with
//! [`Logger::change_output`]; every later call goes to the new destination.

pub mod config;
pub mod factory;
pub mod outputs;

use chrono::{DateTime, Local};
use outputs::LogOutput;

/// Timestamp pattern used in every formatted line.
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Level written by [`Logger::info`]
pub const INFO: &str = "INFO";
/// Level written by [`Logger::warning`]
pub const WARNING: &str = "WARNING";
/// Level written by [`Logger::error`]
pub const ERROR: &str = "ERROR";

/// Leveled logger with a swappable output destination
pub struct Logger {
    output: Box<dyn LogOutput>,
}

impl Logger {
    /// Create a logger that writes to the given output
    pub fn new(output: Box<dyn LogOutput>) -> Self {
        Self { output }
    }

    /// Create a logger for a named output using the default configuration
    pub fn from_name(name: &str) -> Result<Self, LoggingError> {
        Ok(Self::new(factory::create_output(name)?))
    }

    /// Switch to a different output. Only later calls are affected.
    pub fn change_output(&mut self, output: Box<dyn LogOutput>) {
        log::debug!(
            "Switching log output from {} to {}",
            self.output.name(),
            output.name()
        );
        self.output = output;
    }

    /// Name of the currently active output
    pub fn output_name(&self) -> &'static str {
        self.output.name()
    }

    /// Write a message with the current timestamp and the given level.
    ///
    /// Exactly one write is issued to the active output. Output failures are
    /// returned as-is.
    pub fn log(&self, level: &str, message: &str) -> Result<(), LoggingError> {
        let line = format_line(&Local::now(), level, message);
        self.output.write(&line)
    }

    /// Shorthand for `log("INFO", message)`
    pub fn info(&self, message: &str) -> Result<(), LoggingError> {
        self.log(INFO, message)
    }

    /// Shorthand for `log("WARNING", message)`
    pub fn warning(&self, message: &str) -> Result<(), LoggingError> {
        self.log(WARNING, message)
    }

    /// Shorthand for `log("ERROR", message)`
    pub fn error(&self, message: &str) -> Result<(), LoggingError> {
        self.log(ERROR, message)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("output", &self.output.name())
            .finish()
    }
}

/// Format a log line as `[YYYY-MM-DD HH:MM:SS] LEVEL: message`
pub fn format_line(timestamp: &DateTime<Local>, level: &str, message: &str) -> String {
    format!(
        "[{}] {}: {}",
        timestamp.format(LINE_TIMESTAMP_FORMAT),
        level,
        message
    )
}

/// Logging errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Unknown output type: {0}")]
    UnknownOutput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed structured log: {0}")]
    MalformedStructuredLog(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl LoggingError {
    /// Whether the error came from reading or writing an output destination
    pub fn is_output_failure(&self) -> bool {
        matches!(
            self,
            LoggingError::Io(_) | LoggingError::MalformedStructuredLog(_)
        )
    }
}
