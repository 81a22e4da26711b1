//! Configuration types
//!
//! - `base`: [`Config`] itself
//! - `writer`: where lines go ([`WriterConfig`])
//! - `presets`: environment parsing and named presets

mod base;
mod presets;
mod writer;

pub use base::Config;
pub use writer::WriterConfig;

/// Environment variable holding the threshold level
pub const ENV_LEVEL: &str = "MICROLOG_LEVEL";

/// Environment variable selecting the writer: `stdout`, `stderr` or a file path
pub const ENV_WRITER: &str = "MICROLOG_WRITER";
