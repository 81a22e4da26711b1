//! Error handling for microlog
//!
//! Only setup can fail: parsing a level, loading a configuration or opening
//! a file sink. Writing a log line is best-effort and never surfaces errors.

use std::path::PathBuf;

use crate::level::ParseLevelError;

/// Type alias for results of logger setup operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger setup operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file sink could not be opened
    #[error("Writer 'file' error: cannot open '{}': {source}", .path.display())]
    Io {
        /// Path of the sink
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Level could not be parsed, e.g. a bad `MICROLOG_LEVEL` in
    /// [`Config::try_from_env`](crate::Config::try_from_env)
    #[error(transparent)]
    ParseLevel(#[from] ParseLevelError),

    /// Configuration document is not valid JSON
    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a file sink error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::ParseLevel(_) | Self::Json(_))
    }
}
