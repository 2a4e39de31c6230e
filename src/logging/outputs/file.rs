//! Plain text file output handler

use crate::logging::outputs::LogOutput;
use crate::logging::LoggingError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File output handler that appends one line per write.
///
/// The file is opened and closed on every call; no handle is kept between
/// writes. Parent directories are not created.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output handler for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogOutput for FileOutput {
    fn write(&self, text: &str) -> Result<(), LoggingError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", text)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
