//! # microlog - lightweight leveled logging
//!
//! A [`Logger`] holds a threshold [`Level`] and an output sink. Messages at
//! or above the threshold are written as one `"<TAG> <message>\n"` line;
//! everything else is dropped without being formatted.
//!
//! ## Quick Start
//!
//! ```rust
//! use microlog::{Level, Logger, MemorySink, with_output};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(Level::DEBUG, [with_output(sink.clone())]);
//!
//! microlog::debug!(logger, "Hello, {}", "world");
//! microlog::trace!(logger, "not written");
//!
//! assert_eq!(sink.contents(), "[DEBUG] Hello, world\n");
//! ```
//!
//! Without [`with_output`] lines go to standard output. Configuration from
//! the environment or a JSON document goes through [`Config`] and
//! [`LoggerBuilder`]:
//!
//! ```rust,no_run
//! fn main() -> microlog::LogResult<()> {
//!     // MICROLOG_LEVEL=debug MICROLOG_WRITER=/var/log/svc.log
//!     let logger = microlog::init()?;
//!     microlog::info!(logger, "Service started successfully.");
//!     Ok(())
//! }
//! ```
//!
//! ## Levels
//!
//! - `TRACE`: detailed tracing of code execution
//! - `DEBUG`: diagnostic information for troubleshooting
//! - `INFO`: updates and milestones about service operation
//! - `WARN`: potential issues impacting functionality
//! - `ERROR`: recoverable errors requiring attention
//! - `FATAL`: critical errors; the logger still does not exit
//!
//! Sharing a logger between threads is the caller's responsibility; it is
//! `Send + Sync` and each line reaches the sink in a single write.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
mod level;
mod logger;
mod macros;
mod options;
mod writer;

#[cfg(feature = "tracing")]
mod compat;

// Public API
pub use builder::LoggerBuilder;
pub use config::{Config, ENV_LEVEL, ENV_WRITER, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
pub use options::{LoggerOption, with_output};
pub use writer::MemorySink;

#[cfg(feature = "tracing")]
pub use compat::UnmappedLevel;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Level, LogResult, Logger, LoggerBuilder, MemorySink, debug, error, fatal, info,
        log, trace, warn, with_output,
    };
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Build a logger from `MICROLOG_LEVEL` / `MICROLOG_WRITER`
pub fn init() -> LogResult<Logger> {
    init_with(Config::from_env())
}

/// Build a logger from an explicit configuration
pub fn init_with(config: Config) -> LogResult<Logger> {
    LoggerBuilder::from_config(config).build()
}
