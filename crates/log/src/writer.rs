//! Writer implementations

// Standard library
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Arc;

// External dependencies
use parking_lot::Mutex;

// Internal crates
use crate::config::WriterConfig;
use crate::core::{LogError, LogResult};

/// Type-erased sink a [`Logger`](crate::Logger) writes to
pub(crate) type BoxWriter = Box<dyn Write + Send>;

/// Default sink: the process's standard output.
pub(crate) fn default_writer() -> BoxWriter {
    Box::new(io::stdout())
}

/// Create a writer from configuration
pub(crate) fn make_writer(config: &WriterConfig) -> LogResult<BoxWriter> {
    let writer: BoxWriter = match config {
        WriterConfig::Stdout => default_writer(),
        WriterConfig::Stderr => Box::new(io::stderr()),
        WriterConfig::File { path, append } => {
            if path.as_os_str().is_empty() {
                return Err(LogError::config("File writer needs a non-empty path"));
            }

            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(*append)
                .truncate(!*append)
                .open(path)
                .map_err(|e| LogError::io(path, e))?;
            Box::new(file)
        }
    };

    Ok(writer)
}

/// In-memory sink whose clones share one buffer
///
/// Hand one clone to [`with_output`](crate::with_output) and keep another to
/// read back what was written.
///
/// ```rust
/// use microlog::{Level, Logger, MemorySink, with_output};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(Level::INFO, [with_output(sink.clone())]);
/// microlog::warn!(logger, "disk at {}%", 91);
/// assert_eq!(sink.contents(), "[WARN] disk at 91%\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
