//! Severity levels
//!
//! A [`Level`] is a plain ordinal. The six named constants cover the range
//! `0..=5`; any other byte is still a valid level that renders as
//! `[UNKNOWN]` and compares by its ordinal like the rest.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a log message
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Detailed tracing of code execution, capturing fine-grained details.
    pub const TRACE: Self = Self(0);
    /// Diagnostic information useful for troubleshooting and administration.
    pub const DEBUG: Self = Self(1);
    /// Updates and milestones about service operation.
    pub const INFO: Self = Self(2);
    /// Potential issues the service can recover from on its own.
    pub const WARN: Self = Self(3);
    /// Recoverable errors requiring attention but not halting execution.
    pub const ERROR: Self = Self(4);
    /// Critical errors. Logging at this level does not stop the process.
    pub const FATAL: Self = Self(5);

    /// The six named levels, least severe first.
    pub const ALL: [Self; 6] = [
        Self::TRACE,
        Self::DEBUG,
        Self::INFO,
        Self::WARN,
        Self::ERROR,
        Self::FATAL,
    ];

    /// Wrap a raw ordinal. Every byte is accepted.
    pub const fn from_u8(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Raw ordinal of this level.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Whether this is one of the six named levels.
    pub const fn is_known(self) -> bool {
        self.0 <= Self::FATAL.0
    }

    /// Bracketed tag written in front of every log line.
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "[TRACE]",
            1 => "[DEBUG]",
            2 => "[INFO]",
            3 => "[WARN]",
            4 => "[ERROR]",
            5 => "[FATAL]",
            _ => "[UNKNOWN]",
        }
    }

    /// Lowercase name, as used in configuration.
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "trace",
            1 => "debug",
            2 => "info",
            3 => "warn",
            4 => "error",
            5 => "fatal",
            _ => "unknown",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl From<u8> for Level {
    fn from(ordinal: u8) -> Self {
        Self(ordinal)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            f.write_str(&self.name().to_ascii_uppercase())
        } else {
            write!(f, "UNKNOWN({})", self.0)
        }
    }
}

/// Error returned when a string does not name a level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid log level '{input}', expected one of trace, debug, info, warn, error, fatal or an ordinal 0-255"
)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts names in any case (`info`, `INFO`), bracketed tags (`[INFO]`)
    /// and decimal ordinals (`9`), so every level serde accepts parses here too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Ok(Self(ordinal));
        }

        let name = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseLevelError {
                input: s.to_string(),
            })
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_known() {
            serializer.serialize_str(self.name())
        } else {
            serializer.serialize_u8(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level name or an ordinal between 0 and 255")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Level, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Level, E> {
        u8::try_from(v)
            .map(Level)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Level, E> {
        u8::try_from(v)
            .map(Level)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}
