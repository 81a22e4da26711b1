//! Core configuration types

use serde::{Deserialize, Serialize};

use super::WriterConfig;
use crate::core::LogResult;
use crate::level::Level;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level a message needs to be written
    pub level: Level,

    /// Output writer configuration
    pub writer: WriterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            writer: WriterConfig::Stdout,
        }
    }
}

impl Config {
    /// Parse a configuration document
    ///
    /// Missing fields take their defaults.
    pub fn from_json(document: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(document)?)
    }
}
