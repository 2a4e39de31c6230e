//! Structured JSON output handler

use crate::logging::outputs::LogOutput;
use crate::logging::LoggingError;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Timestamp pattern for structured entries (ISO-8601, local time with UTC
/// offset, microseconds). The offset keeps entries ordered across DST changes.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// One persisted record in the structured log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredLogEntry {
    /// Time of the write, ISO-8601
    pub timestamp: String,
    /// The fully formatted log line
    pub message: String,
}

impl StructuredLogEntry {
    /// Build an entry stamped with the current local time
    pub fn now(message: &str) -> Self {
        Self {
            timestamp: Local::now().format(ENTRY_TIMESTAMP_FORMAT).to_string(),
            message: message.to_string(),
        }
    }
}

/// Structured output handler that keeps all entries in one JSON array.
///
/// Every write loads the whole array, appends one entry and rewrites the
/// file, so each write costs O(n) in the number of existing entries. This is
/// only suitable for small logs.
#[derive(Debug, Clone)]
pub struct StructuredOutput {
    path: PathBuf,
}

impl StructuredOutput {
    /// Create a new structured output handler for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted entries. A missing file yields an empty list; any
    /// other read or parse failure is returned.
    pub fn read_entries(&self) -> Result<Vec<StructuredLogEntry>, LoggingError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<StructuredLogEntry> = serde_json::from_str(&content)?;
        log::trace!(
            "Loaded {} structured log entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}

impl LogOutput for StructuredOutput {
    fn write(&self, text: &str) -> Result<(), LoggingError> {
        let mut entries = self.read_entries()?;
        entries.push(StructuredLogEntry::now(text));

        let content = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
