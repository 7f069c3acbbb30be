//! Process-wide logger instance.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::logger::error::LoggerResult;
use crate::logger::level::Level;
use crate::logger::writer::Logger;

static INSTANCE: OnceLock<Arc<Logger>> = OnceLock::new();

/// Serializes construction so concurrent first callers wait for the winner
/// and a failed attempt leaves the slot empty.
static INIT: Mutex<()> = Mutex::new(());

impl Logger {
    /// Initialize the process-wide logger, or return it if it already exists.
    ///
    /// Only the first successful call configures the logger; later calls get
    /// the same instance and their `dir` and `min_level` are ignored.
    pub fn init(dir: impl AsRef<Path>, min_level: Level) -> LoggerResult<Arc<Logger>> {
        if let Some(logger) = INSTANCE.get() {
            return Ok(Arc::clone(logger));
        }

        let _guard = INIT.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = INSTANCE.get() {
            return Ok(Arc::clone(logger));
        }

        let logger = Arc::new(Logger::open(dir, min_level)?);
        Ok(Arc::clone(INSTANCE.get_or_init(|| logger)))
    }

    /// The process-wide logger, if [`Logger::init`] has succeeded.
    pub fn global() -> Option<Arc<Logger>> {
        INSTANCE.get().cloned()
    }
}
