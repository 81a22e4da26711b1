//! Conversions to and from `tracing` levels

use crate::level::Level;

/// A [`Level`] outside the named six has no `tracing` counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("level {0:?} has no tracing equivalent")]
pub struct UnmappedLevel(pub Level);

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::TRACE,
            tracing::Level::DEBUG => Self::DEBUG,
            tracing::Level::INFO => Self::INFO,
            tracing::Level::WARN => Self::WARN,
            _ => Self::ERROR,
        }
    }
}

impl TryFrom<Level> for tracing::Level {
    type Error = UnmappedLevel;

    /// `FATAL` folds into `ERROR`, the most severe `tracing` level.
    fn try_from(level: Level) -> Result<Self, Self::Error> {
        match level {
            Level::TRACE => Ok(Self::TRACE),
            Level::DEBUG => Ok(Self::DEBUG),
            Level::INFO => Ok(Self::INFO),
            Level::WARN => Ok(Self::WARN),
            Level::ERROR | Level::FATAL => Ok(Self::ERROR),
            other => Err(UnmappedLevel(other)),
        }
    }
}
