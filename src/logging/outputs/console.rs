//! Console output handler

use crate::logging::outputs::LogOutput;
use crate::logging::LoggingError;
use std::io::{self, Write};

/// Console output handler that prints each line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a new console output handler
    pub fn new() -> Self {
        Self
    }
}

impl LogOutput for ConsoleOutput {
    fn write(&self, text: &str) -> Result<(), LoggingError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
