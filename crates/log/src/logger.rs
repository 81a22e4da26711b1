//! Leveled logger

use std::fmt::{self, Write as _};
use std::io::Write;

use parking_lot::Mutex;

use crate::level::Level;
use crate::options::LoggerOption;
use crate::writer::{self, BoxWriter};

/// Writes `"<TAG> <message>\n"` lines for messages at or above a threshold
///
/// Threshold and output are fixed once [`Logger::new`] returns. Each
/// qualifying call formats the full line first and hands it to the sink in a
/// single `write_all`. Sink errors are dropped: logging never fails the
/// caller, and [`Logger::fatal`] does not stop the process.
///
/// The logger is `Send + Sync`; share it with an `Arc` if several threads
/// need it.
pub struct Logger {
    threshold: Level,
    output: Mutex<BoxWriter>,
}

impl Logger {
    /// Create a logger writing to standard output, then apply `options` in order
    pub fn new<I>(threshold: Level, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut logger = Self {
            threshold,
            output: Mutex::new(writer::default_writer()),
        };

        for option in options {
            option.apply(&mut logger);
        }

        logger
    }

    pub(crate) fn replace_output(&mut self, output: BoxWriter) {
        *self.output.get_mut() = output;
    }

    /// Minimum level a message needs to be written
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Whether a message at `level` would be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Log at trace level
    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::TRACE, args);
    }

    /// Log at debug level
    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    /// Log at info level
    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    /// Log at warn level
    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARN, args);
    }

    /// Log at error level
    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    /// Log at fatal level. The process keeps running.
    #[inline]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Level::FATAL, args);
    }

    /// Log at an arbitrary level, including ones outside the named six
    #[inline]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.threshold > level {
            return;
        }

        self.write_line(level, args);
    }

    fn write_line(&self, level: Level, args: fmt::Arguments<'_>) {
        // A failing Display impl leaves a truncated message instead of panicking.
        let mut line = String::new();
        let _ = write!(line, "{level} {args}");
        line.push('\n');

        let _ = self.output.lock().write_all(line.as_bytes());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
