//! Logger builder implementation

use std::fmt;
use std::io::Write;

use crate::config::Config;
use crate::core::LogResult;
use crate::logger::Logger;
use crate::options::{LoggerOption, with_output};
use crate::writer;

/// Builds a [`Logger`] from a [`Config`]
///
/// The configured writer is opened first; options added with
/// [`with_option`](Self::with_option) or [`with_output`](Self::with_output)
/// are applied after it, so an explicit output replaces the configured one.
pub struct LoggerBuilder {
    config: Config,
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            options: Vec::new(),
        }
    }

    /// Append an option, applied after the configured writer
    #[must_use]
    pub fn with_option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Override the configured writer
    #[must_use]
    pub fn with_output<W>(self, output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.with_option(with_output(output))
    }

    /// Build the logger
    ///
    /// # Errors
    ///
    /// Returns error if the configured file writer cannot be opened
    pub fn build(self) -> LogResult<Logger> {
        let writer = writer::make_writer(&self.config.writer)?;

        let options = std::iter::once(LoggerOption::boxed_output(writer)).chain(self.options);
        Ok(Logger::new(self.config.level, options))
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("options", &self.options.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriterConfig;
    use crate::core::LogError;
    use crate::{Level, MemorySink};
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_with_configured_level() {
        let sink = MemorySink::new();
        let logger = LoggerBuilder::from_config(Config::production())
            .with_output(sink.clone())
            .build()
            .unwrap();

        assert_eq!(logger.threshold(), Level::INFO);
        logger.debug(format_args!("dropped"));
        logger.warn(format_args!("kept"));
        assert_eq!(sink.contents(), "[WARN] kept\n");
    }

    #[test]
    fn writes_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.log");
        let config = Config {
            level: Level::DEBUG,
            writer: WriterConfig::file(&path),
        };

        let logger = LoggerBuilder::from_config(config).build().unwrap();
        logger.trace(format_args!("too chatty"));
        logger.debug(format_args!("cache warmed in {}ms", 12));
        drop(logger);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[DEBUG] cache warmed in 12ms\n"
        );
    }

    #[test]
    fn explicit_output_skips_nothing_but_the_configured_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unused.log");
        let sink = MemorySink::new();
        let config = Config {
            level: Level::TRACE,
            writer: WriterConfig::file(&path),
        };

        let logger = LoggerBuilder::from_config(config)
            .with_output(sink.clone())
            .build()
            .unwrap();
        logger.info(format_args!("here"));
        drop(logger);

        assert_eq!(sink.contents(), "[INFO] here\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unopenable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            level: Level::INFO,
            writer: WriterConfig::file(dir.path().join("nope").join("x.log")),
        };

        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
    }
}
