//! Construction-time options for [`Logger`]

use std::fmt;
use std::io::Write;

use crate::logger::Logger;
use crate::writer::BoxWriter;

/// Deferred change applied to a [`Logger`] while it is being constructed
///
/// Options run once, in the order they were passed, right after the logger
/// has been given its defaults. A later option overrides an earlier one.
pub struct LoggerOption(Box<dyn FnOnce(&mut Logger) + Send>);

impl LoggerOption {
    pub(crate) fn new(f: impl FnOnce(&mut Logger) + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    pub(crate) fn apply(self, logger: &mut Logger) {
        (self.0)(logger);
    }

    pub(crate) fn boxed_output(writer: BoxWriter) -> Self {
        Self::new(move |logger| logger.replace_output(writer))
    }
}

impl fmt::Debug for LoggerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOption").finish_non_exhaustive()
    }
}

/// Send log lines to `output` instead of standard output
///
/// The logger owns the handle it is given and drops it along with itself;
/// it never closes or flushes anything on its own. To keep a file open after
/// the logger is gone, pass `file.try_clone()?` and keep the original.
/// [`MemorySink`](crate::MemorySink) clones and `io::stdout()` work the same
/// way.
pub fn with_output<W>(output: W) -> LoggerOption
where
    W: Write + Send + 'static,
{
    LoggerOption::boxed_output(Box::new(output))
}
