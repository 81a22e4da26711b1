//! Configuration presets for common scenarios

use super::{Config, ENV_LEVEL, ENV_WRITER, WriterConfig};
use crate::core::LogResult;
use crate::level::Level;

/// `RUST_LOG` counts only when it is a single plain level
fn rust_log_level(lookup: &impl Fn(&str) -> Option<String>) -> Option<Level> {
    lookup("RUST_LOG").and_then(|v| v.parse::<Level>().ok())
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// `MICROLOG_LEVEL` wins over `RUST_LOG`; the latter is only honored when
    /// it is a single plain level such as `debug`. Both accept level names
    /// and decimal ordinals (`MICROLOG_LEVEL=9`). Values that do not parse
    /// leave the default in place; use [`Config::try_from_env`] to reject them.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but a `MICROLOG_LEVEL` that does not parse
    /// is an error instead of being ignored
    pub fn try_from_env() -> LogResult<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Parse MICROLOG_LEVEL or RUST_LOG
        let level = lookup(ENV_LEVEL)
            .and_then(|v| v.parse::<Level>().ok())
            .or_else(|| rust_log_level(&lookup));
        if let Some(level) = level {
            config.level = level;
        }

        if let Some(writer) = lookup(ENV_WRITER).and_then(|v| WriterConfig::from_env_value(&v)) {
            config.writer = writer;
        }

        config
    }

    pub(crate) fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        let mut config = Self::from_lookup(&lookup);

        if let Some(value) = lookup(ENV_LEVEL) {
            config.level = value.parse::<Level>()?;
        }

        Ok(config)
    }

    /// Development configuration (trace level, stdout)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::TRACE,
            writer: WriterConfig::Stdout,
        }
    }

    /// Production configuration (info level, stderr)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            writer: WriterConfig::Stderr,
        }
    }

    /// Test configuration (everything, stdout so the harness captures it)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: Level::TRACE,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogError;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(env(&[])), Config::default());
    }

    #[test]
    fn microlog_level_wins_over_rust_log() {
        let config = Config::from_lookup(env(&[(ENV_LEVEL, "error"), ("RUST_LOG", "debug")]));
        assert_eq!(config.level, Level::ERROR);
    }

    #[test]
    fn rust_log_used_when_plain_level() {
        let config = Config::from_lookup(env(&[("RUST_LOG", "debug")]));
        assert_eq!(config.level, Level::DEBUG);

        let config = Config::from_lookup(env(&[("RUST_LOG", "debug,hyper=warn")]));
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn invalid_level_falls_back() {
        let config = Config::from_lookup(env(&[(ENV_LEVEL, "loud"), ("RUST_LOG", "warn")]));
        assert_eq!(config.level, Level::WARN);
    }

    #[test]
    fn ordinal_level_from_environment() {
        let config = Config::from_lookup(env(&[(ENV_LEVEL, "9")]));
        assert_eq!(config.level, Level::from_u8(9));

        let config = Config::try_from_lookup(env(&[(ENV_LEVEL, "4")])).unwrap();
        assert_eq!(config.level, Level::ERROR);
    }

    #[test]
    fn strict_lookup_rejects_bad_level() {
        let err = Config::try_from_lookup(env(&[(ENV_LEVEL, "loud"), ("RUST_LOG", "warn")]))
            .unwrap_err();
        assert!(matches!(err, LogError::ParseLevel(ref e) if e.input() == "loud"));
        assert!(err.is_client_error());
    }

    #[test]
    fn strict_lookup_matches_lenient_when_valid() {
        let vars = [(ENV_WRITER, "stderr"), ("RUST_LOG", "debug")];
        assert_eq!(
            Config::try_from_lookup(env(&vars)).unwrap(),
            Config::from_lookup(env(&vars))
        );
    }

    #[test]
    fn writer_from_environment() {
        let config = Config::from_lookup(env(&[(ENV_WRITER, "STDERR")]));
        assert_eq!(config.writer, WriterConfig::Stderr);

        let config = Config::from_lookup(env(&[(ENV_WRITER, "/var/log/svc.log")]));
        assert_eq!(config.writer, WriterConfig::file("/var/log/svc.log"));

        let config = Config::from_lookup(env(&[(ENV_WRITER, "  ")]));
        assert_eq!(config.writer, WriterConfig::Stdout);
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().level, Level::TRACE);
        assert_eq!(Config::production().writer, WriterConfig::Stderr);
        assert_eq!(Config::test().level, Level::TRACE);
    }
}
