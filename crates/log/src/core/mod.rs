//! Core types shared across the crate.
//!
//! ### [`error`] - Error handling
//! The [`LogError`] enum and the [`LogResult`] alias used by every fallible
//! setup path. Emitting a log line never returns an error.

pub mod error;

pub use error::{LogError, LogResult};
