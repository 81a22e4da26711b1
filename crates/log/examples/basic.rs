//! Basic usage: one logger on stdout, one built from the environment.
//!
//! ```sh
//! MICROLOG_LEVEL=warn cargo run -p microlog --example basic
//! ```

use microlog::prelude::*;

fn main() -> LogResult<()> {
    let logger = Logger::new(Level::DEBUG, []);
    debug!(logger, "Hello, {}", "world");
    trace!(logger, "not shown at debug");

    let from_env = microlog::init()?;
    info!(from_env, "threshold from environment is {:?}", from_env.threshold());
    warn!(from_env, "Memory usage high: {}%", 93);
    fatal!(from_env, "Server crashed unexpectedly. Still running though.");

    Ok(())
}
