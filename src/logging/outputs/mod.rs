//! Output handlers for different logging destinations
//!
//! This module contains implementations for the supported log output types:
//! - Console output (stdout)
//! - File output (plain text, appended)
//! - Structured JSON output (array of timestamped entries)

pub mod console;
pub mod file;
pub mod structured;

pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use structured::{StructuredLogEntry, StructuredOutput};

use crate::logging::LoggingError;

/// A destination for fully formatted log lines
pub trait LogOutput: Send {
    /// Persist or display one formatted line
    fn write(&self, text: &str) -> Result<(), LoggingError>;

    /// Output type name, matching the name the factory accepts
    fn name(&self) -> &'static str;
}
