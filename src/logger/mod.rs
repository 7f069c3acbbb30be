//! Application logging subsystem.
//!
//! # Data Flow
//! ```text
//! log_info!(logger, "...", args)
//!     → level filter (no lock when filtered out)
//!     → lock output
//!     → rotation check (YYYY_MM_DD.log for today)
//!     → "<timestamp> [LEVEL] message (file.rs:line)" appended
//!     → unlock
//! ```
//!
//! # Design Decisions
//! - Explicit handle: an `Arc<Logger>` is passed to whoever logs; the
//!   process-wide instance from `Logger::init` is one such handle
//! - Caller attribution through `#[track_caller]`, so the recorded location
//!   is the application call site
//! - Logger failures after startup never panic; they are reported through
//!   `tracing` and the entry is dropped or kept in the previous file

pub mod clock;
pub mod error;
pub mod global;
pub mod level;
pub mod writer;

pub use clock::{Clock, SystemClock};
pub use error::{LoggerError, LoggerResult};
pub use level::Level;
pub use writer::Logger;

/// Log at `TRACE` through the given logger.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Log at `DEBUG` through the given logger.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log at `INFO` through the given logger.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log at `WARN` through the given logger.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log at `ERROR` through the given logger.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log at `FATAL` through the given logger.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}
