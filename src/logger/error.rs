//! Logger error definitions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the logger.
///
/// `CreateDir`, `Resolve` and `Open` only come out of construction; a
/// process that cannot build its logger is expected to exit.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// The log directory could not be resolved to an absolute path.
    #[error("failed to resolve log directory {path}: {source}")]
    Resolve { path: PathBuf, source: io::Error },

    /// A log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// Appending a line to the current file failed.
    #[error("failed to write log line: {0}")]
    Write(#[source] io::Error),

    /// The logger was closed.
    #[error("logger is closed")]
    Closed,
}

/// Result type for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;
