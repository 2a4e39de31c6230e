//! Construction of log outputs by name

use crate::logging::config::LogConfig;
use crate::logging::outputs::{ConsoleOutput, FileOutput, LogOutput, StructuredOutput};
use crate::logging::LoggingError;
use std::fmt;
use std::str::FromStr;

/// The closed set of output types the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Console,
    File,
    Json,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [OutputKind::Console, OutputKind::File, OutputKind::Json];

    /// Name accepted by [`create_output`]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Console => "console",
            OutputKind::File => "file",
            OutputKind::Json => "json",
        }
    }

    /// Build a fresh output of this kind. Nothing touches the filesystem here.
    pub fn build(&self, config: &LogConfig) -> Box<dyn LogOutput> {
        match self {
            OutputKind::Console => Box::new(ConsoleOutput::new()),
            OutputKind::File => Box::new(FileOutput::new(&config.outputs.file.path)),
            OutputKind::Json => Box::new(StructuredOutput::new(&config.outputs.structured.path)),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(OutputKind::Console),
            "file" => Ok(OutputKind::File),
            "json" => Ok(OutputKind::Json),
            other => Err(LoggingError::UnknownOutput(other.to_string())),
        }
    }
}

/// Create an output by name using the default destinations
pub fn create_output(name: &str) -> Result<Box<dyn LogOutput>, LoggingError> {
    create_output_with_config(name, &LogConfig::default())
}

/// Create an output by name using the destinations from `config`
pub fn create_output_with_config(
    name: &str,
    config: &LogConfig,
) -> Result<Box<dyn LogOutput>, LoggingError> {
    let kind: OutputKind = name.parse()?;
    // Only the destination the chosen kind writes to has to be usable
    match kind {
        OutputKind::Console => {}
        OutputKind::File => config.outputs.file.validate()?,
        OutputKind::Json => config.outputs.structured.validate()?,
    }
    log::debug!("Creating {} log output", kind);
    Ok(kind.build(config))
}
