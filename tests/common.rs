#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use switchlog::{LogOutput, LoggingError};

/// Output that records every line it receives
pub struct RecordingOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingOutput {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl LogOutput for RecordingOutput {
    fn write(&self, text: &str) -> Result<(), LoggingError> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn recorded(lines: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    lines.lock().unwrap().clone()
}

/// Strip the `[timestamp] ` prefix from a formatted line
pub fn without_timestamp(line: &str) -> &str {
    line.split_once("] ").map(|(_, rest)| rest).unwrap_or(line)
}
