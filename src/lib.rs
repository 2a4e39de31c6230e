//! # switchlog
//!
//! A small leveled logger whose output destination can be swapped at runtime.
//!
//! ## Core Components
//!
//! * `logging::outputs` - Output destinations (console, text file, JSON record store)
//! * `logging::factory` - Builds an output from its name
//! * `logging::config` - Destination paths loaded from defaults, TOML and environment
//! * `logging::Logger` - Formats leveled messages and hands them to the active output
//!
//! ## Example
//!
//! ```no_run
//! use switchlog::{create_output, Logger};
//!
//! # fn main() -> Result<(), switchlog::LoggingError> {
//! let mut logger = Logger::new(create_output("console")?);
//! logger.info("App started")?;
//!
//! logger.change_output(create_output("file")?);
//! logger.error("Database connection failed")?;
//! # Ok(())
//! # }
//! ```

pub mod logging;

pub use logging::config::{ConfigError, LogConfig};
pub use logging::factory::{create_output, create_output_with_config, OutputKind};
pub use logging::outputs::{ConsoleOutput, FileOutput, LogOutput, StructuredLogEntry, StructuredOutput};
pub use logging::{Logger, LoggingError};
