//! Writer configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[derive(Default)]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stdout
    #[default]
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to a file, created if missing
    File {
        /// Path to the log file
        path: PathBuf,
        /// Append to existing content instead of truncating it
        #[serde(default = "default_append")]
        append: bool,
    },
}

impl WriterConfig {
    /// File writer that appends to `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            append: default_append(),
        }
    }

    /// Interpret a `MICROLOG_WRITER` value
    pub(super) fn from_env_value(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            v if v.eq_ignore_ascii_case("stdout") => Some(Self::Stdout),
            v if v.eq_ignore_ascii_case("stderr") => Some(Self::Stderr),
            path => Some(Self::file(path)),
        }
    }
}

fn default_append() -> bool {
    true
}
