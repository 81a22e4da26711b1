//! Formatting macros
//!
//! Each macro takes the logger first, then a `format!`-style template and
//! its arguments. Arguments are captured with `format_args!`, so nothing is
//! rendered when the level is filtered out.

/// Log at an explicit [`Level`](crate::Level)
///
/// ```rust
/// use microlog::{Level, Logger, MemorySink, with_output};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(Level::TRACE, [with_output(sink.clone())]);
/// microlog::log!(logger, Level::WARN, "retry {} of {}", 2, 5);
/// assert_eq!(sink.contents(), "[WARN] retry 2 of 5\n");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

/// Log at trace level
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(::core::format_args!($($arg)+))
    };
}

/// Log at debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

/// Log at info level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

/// Log at warn level
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::core::format_args!($($arg)+))
    };
}

/// Log at error level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Log at fatal level. Does not exit.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}
