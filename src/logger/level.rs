//! Log severity levels.

use std::fmt;

/// Severity of a log entry, ordered from most to least severe.
///
/// A logger configured at level `L` admits an entry of severity `S` when
/// `S <= L`, so `Fatal` is always written and `Trace` only when the logger
/// is configured at `Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 6] = [
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Map a configured level name to a `Level`.
    ///
    /// Matching is case-sensitive. Unrecognized names fall back to
    /// [`Level::Trace`] so a misconfigured deployment logs more, not less.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TRACE" => Level::Trace,
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERROR" => Level::Error,
            "FATAL" => Level::Fatal,
            _ => Level::Trace,
        }
    }

    /// Canonical upper-case name, as written into log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Whether an entry of severity `self` passes a filter set at `min`.
    #[inline]
    pub fn is_admitted_by(self, min: Level) -> bool {
        self <= min
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
