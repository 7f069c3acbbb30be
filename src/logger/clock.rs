//! Wall-clock source for file naming and timestamps.

use chrono::{DateTime, Local};

/// File name pattern of a day's log file.
pub const FILE_NAME_FORMAT: &str = "%Y_%m_%d.log";

/// Timestamp pattern at the start of each log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
///
/// The logger reads the date for its rotation check through this trait so
/// that a day boundary can be simulated.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Name of the log file for the date of `now`.
pub fn file_name_for(now: &DateTime<Local>) -> String {
    now.format(FILE_NAME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_for() {
        let t = Local.with_ymd_and_hms(2024, 3, 7, 23, 59, 59).unwrap();
        assert_eq!(file_name_for(&t), "2024_03_07.log");
    }

    #[test]
    fn test_timestamp_format() {
        let t = Local.with_ymd_and_hms(2024, 12, 1, 8, 5, 0).unwrap();
        assert_eq!(t.format(TIMESTAMP_FORMAT).to_string(), "2024-12-01 08:05:00");
    }
}
