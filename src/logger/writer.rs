//! Date-rotating file logger.
//!
//! # Responsibilities
//! - Filter entries by severity before doing any work
//! - Append one formatted, caller-attributed line per admitted entry
//! - Switch to a new file when the local date changes
//! - Release the file handle on shutdown
//!
//! # Design Decisions
//! - One mutex covers the rotation check and the append, so no line can land
//!   in a superseded file
//! - Rotation is checked on the write path; an idle logger does no work
//! - Writes go straight to the unbuffered handle, one `write_all` per line
//! - Runtime file errors degrade to the previous handle instead of panicking

use std::fmt;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};

use crate::logger::clock::{file_name_for, Clock, SystemClock, TIMESTAMP_FORMAT};
use crate::logger::error::{LoggerError, LoggerResult};
use crate::logger::level::Level;

/// The open file and its date-derived name.
struct Output {
    file_name: String,
    /// `None` once the logger has been closed.
    file: Option<File>,
}

/// Leveled, thread-safe logger writing one file per calendar day.
///
/// Files are named `YYYY_MM_DD.log` inside the configured directory and each
/// line reads `<YYYY-MM-DD HH:MM:SS> [<LEVEL>] <message> (<file>:<line>)`.
pub struct Logger {
    min_level: Level,
    dir: PathBuf,
    clock: Arc<dyn Clock>,
    output: Mutex<Output>,
}

impl Logger {
    /// Create a logger writing into `dir` using the system clock.
    ///
    /// The directory (and its parents) is created when missing and the file
    /// for the current date is opened immediately.
    pub fn open(dir: impl AsRef<Path>, min_level: Level) -> LoggerResult<Self> {
        Self::with_clock(dir, min_level, Arc::new(SystemClock))
    }

    /// Create a logger that reads the current time from `clock`.
    pub fn with_clock(
        dir: impl AsRef<Path>,
        min_level: Level,
        clock: Arc<dyn Clock>,
    ) -> LoggerResult<Self> {
        let dir = dir.as_ref();
        create_log_dir(dir)?;
        let dir = std::path::absolute(dir).map_err(|source| LoggerError::Resolve {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_name = file_name_for(&clock.now());
        let file = open_append(&dir.join(&file_name))?;

        Ok(Self {
            min_level,
            dir,
            clock,
            output: Mutex::new(Output {
                file_name,
                file: Some(file),
            }),
        })
    }

    /// Absolute path of the log directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Name of the file currently being written.
    pub fn filename(&self) -> String {
        self.lock_output().file_name.clone()
    }

    /// The configured minimum severity.
    pub fn level(&self) -> Level {
        self.min_level
    }

    /// Whether an entry at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.is_admitted_by(self.min_level)
    }

    /// Write one entry at `level`, attributed to the caller.
    ///
    /// Entries below the configured level return `Ok(())` without taking the
    /// lock. After [`close`](Self::close) every admitted entry fails with
    /// [`LoggerError::Closed`].
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) -> LoggerResult<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let caller = Location::caller();
        let message = args.to_string();

        let mut output = self.lock_output();
        if output.file.is_none() {
            return Err(LoggerError::Closed);
        }

        let now = self.clock.now();
        self.rotate(&mut output, &now);

        let line = format!(
            "{} [{}] {} ({}:{})\n",
            now.format(TIMESTAMP_FORMAT),
            level,
            message,
            base_name(caller.file()),
            caller.line()
        );
        let file = output.file.as_mut().ok_or(LoggerError::Closed)?;
        file.write_all(line.as_bytes()).map_err(LoggerError::Write)
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Trace, args));
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Debug, args));
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Info, args));
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Warn, args));
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Error, args));
    }

    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        report(self.log(Level::Fatal, args));
    }

    /// Sync and release the current file. Calling it again is a no-op.
    pub fn close(&self) {
        let mut output = self.lock_output();
        if let Some(file) = output.file.take() {
            if let Err(e) = file.sync_all() {
                tracing::warn!(file = %output.file_name, error = %e, "Failed to sync log file on close");
            }
            tracing::debug!(file = %output.file_name, "Log file closed");
        }
    }

    /// Switch to the file for `now` if the date has changed.
    ///
    /// Must be called with the output lock held. If the new file cannot be
    /// opened the current one stays in place and the next entry retries.
    fn rotate(&self, output: &mut Output, now: &DateTime<Local>) {
        let expected = file_name_for(now);
        if output.file_name == expected {
            return;
        }

        let new_file = match open_append(&self.dir.join(&expected)) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    current = %output.file_name,
                    error = %e,
                    "Log rotation failed, keeping current file"
                );
                return;
            }
        };

        if let Some(old) = output.file.take() {
            if let Err(e) = old.sync_all() {
                tracing::warn!(file = %output.file_name, error = %e, "Failed to sync rotated log file");
            }
        }

        tracing::debug!(from = %output.file_name, to = %expected, "Log file rotated");
        output.file = Some(new_file);
        output.file_name = expected;
    }

    fn lock_output(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

fn report(result: LoggerResult<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "Failed to write log entry");
    }
}

fn create_log_dir(dir: &Path) -> LoggerResult<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|source| LoggerError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn open_append(path: &Path) -> LoggerResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// File name component of a source path, for either separator.
fn base_name(file: &str) -> &str {
    file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;
    use std::fs;
    use std::thread;

    struct ManualClock(Mutex<DateTime<Local>>);

    impl ManualClock {
        fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Arc<Self> {
            Arc::new(Self(Mutex::new(
                Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap(),
            )))
        }

        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            *self.0.lock().unwrap()
        }
    }

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("src/http/users.rs"), "users.rs");
        assert_eq!(base_name("C:\\work\\src\\main.rs"), "main.rs");
        assert_eq!(base_name("main.rs"), "main.rs");
    }

    #[test]
    fn test_open_creates_directory_and_todays_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let clock = ManualClock::at(2024, 5, 1, 9, 0, 0);

        let logger = Logger::with_clock(&dir, Level::Info, clock).unwrap();

        assert!(logger.path().is_absolute());
        assert_eq!(logger.filename(), "2024_05_01.log");
        assert_eq!(log_files(&dir), vec!["2024_05_01.log"]);
    }

    #[test]
    fn test_line_format() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 9, 30, 15);
        let logger = Logger::with_clock(tmp.path(), Level::Trace, clock).unwrap();

        let line_no = line!() + 1;
        logger.info(format_args!("ride {} saved", 42));

        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        assert_eq!(
            content,
            format!("2024-05-01 09:30:15 [INFO] ride 42 saved (writer.rs:{})\n", line_no)
        );
    }

    #[test]
    fn test_filtered_levels_write_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 23, 59, 0);
        let logger = Logger::with_clock(tmp.path(), Level::Info, clock.clone()).unwrap();

        // Past midnight: a filtered call must not rotate either.
        clock.advance(Duration::minutes(5));
        logger.trace(format_args!("hidden"));
        logger.debug(format_args!("hidden"));

        assert_eq!(log_files(tmp.path()), vec!["2024_05_01.log"]);
        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_rotation_on_day_boundary() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 23, 58, 0);
        let logger = Logger::with_clock(tmp.path(), Level::Debug, clock.clone()).unwrap();

        for i in 0..10 {
            logger.info(format_args!("before {}", i));
            clock.advance(Duration::seconds(1));
        }
        assert_eq!(log_files(tmp.path()), vec!["2024_05_01.log"]);

        clock.advance(Duration::minutes(2));
        for i in 0..5 {
            logger.info(format_args!("after {}", i));
        }

        assert_eq!(logger.filename(), "2024_05_02.log");
        assert_eq!(log_files(tmp.path()), vec!["2024_05_01.log", "2024_05_02.log"]);

        let day1 = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        let day2 = fs::read_to_string(tmp.path().join("2024_05_02.log")).unwrap();
        assert_eq!(day1.lines().count(), 10);
        assert_eq!(day2.lines().count(), 5);
        assert!(day1.lines().all(|l| l.contains("before")));
        assert!(day2.lines().all(|l| l.contains("after") && l.starts_with("2024-05-02")));
    }

    #[test]
    fn test_failed_rotation_keeps_current_file() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 23, 59, 0);
        let logger = Logger::with_clock(tmp.path(), Level::Info, clock.clone()).unwrap();

        // A directory squatting on tomorrow's name makes the open fail.
        fs::create_dir(tmp.path().join("2024_05_02.log")).unwrap();
        clock.advance(Duration::minutes(2));

        assert!(logger.log(Level::Info, format_args!("still logged")).is_ok());
        assert_eq!(logger.filename(), "2024_05_01.log");

        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        assert!(content.contains("still logged"));

        // Once the obstacle is gone the next entry rotates.
        fs::remove_dir(tmp.path().join("2024_05_02.log")).unwrap();
        logger.info(format_args!("rotated"));
        assert_eq!(logger.filename(), "2024_05_02.log");
    }

    #[test]
    fn test_concurrent_writers() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 12, 0, 0);
        let logger = Arc::new(Logger::with_clock(tmp.path(), Level::Trace, clock).unwrap());

        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        logger.debug(format_args!("seq={}", t * PER_THREAD + i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        let mut seen = HashSet::new();
        for line in content.lines() {
            assert!(line.starts_with("2024-05-01 12:00:00 [DEBUG] seq="), "corrupt line: {line}");
            assert!(line.ends_with(')'), "corrupt line: {line}");
            let seq: usize = line
                .split("seq=")
                .nth(1)
                .and_then(|rest| rest.split(' ').next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!(seen.insert(seq), "duplicate seq {seq}");
        }
        assert_eq!(seen.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_per_thread_order_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 12, 0, 0);
        let logger = Arc::new(Logger::with_clock(tmp.path(), Level::Trace, clock).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..100 {
                        logger.info(format_args!("t{} n{}", t, i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        for t in 0..4 {
            let prefix = format!("t{} n", t);
            let order: Vec<usize> = content
                .lines()
                .filter_map(|l| l.split("[INFO] ").nth(1))
                .filter_map(|m| m.strip_prefix(&prefix))
                .map(|rest| rest.split(' ').next().unwrap().parse().unwrap())
                .collect();
            assert_eq!(order, (0..100).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_close_is_idempotent_and_rejects_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 12, 0, 0);
        let logger = Logger::with_clock(tmp.path(), Level::Info, clock.clone()).unwrap();

        logger.info(format_args!("open"));
        logger.close();
        logger.close();

        assert!(matches!(
            logger.log(Level::Error, format_args!("late")),
            Err(LoggerError::Closed)
        ));
        // Convenience methods swallow the error.
        logger.fatal(format_args!("late"));

        // A closed logger never reopens, even across a day boundary.
        clock.advance(Duration::days(1));
        logger.error(format_args!("late"));
        assert_eq!(log_files(tmp.path()), vec!["2024_05_01.log"]);

        let content = fs::read_to_string(tmp.path().join("2024_05_01.log")).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_open_fails_when_directory_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = Logger::open(&blocker, Level::Info).unwrap_err();
        assert!(matches!(err, LoggerError::CreateDir { .. }));
    }
}
