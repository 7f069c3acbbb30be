//! Shared utilities for integration tests.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};
use gobike_server::logger::{Clock, Level, Logger};
use gobike_server::{AppConfig, HttpServer};

/// A clock that only moves when told to.
#[allow(dead_code)]
pub struct ManualClock(Mutex<DateTime<Local>>);

#[allow(dead_code)]
impl ManualClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Arc<Self> {
        Arc::new(Self(Mutex::new(
            Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap(),
        )))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.0.lock().unwrap()
    }
}

/// A clock that moves one second forward on every reading.
#[allow(dead_code)]
pub struct TickingClock {
    base: DateTime<Local>,
    ticks: AtomicI64,
}

#[allow(dead_code)]
impl TickingClock {
    pub fn starting_at(y: i32, m: u32, d: u32) -> Arc<Self> {
        Arc::new(Self {
            base: Local.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        })
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Local> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + chrono::Duration::seconds(n)
    }
}

/// Default configuration with the cheapest bcrypt cost.
#[allow(dead_code)]
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.bcrypt_cost = 4;
    config
}

/// Server wired to a fresh logger in `dir`.
#[allow(dead_code)]
pub fn test_server(dir: &Path, level: Level) -> (HttpServer, Arc<Logger>) {
    test_server_with(dir, level, test_config())
}

#[allow(dead_code)]
pub fn test_server_with(dir: &Path, level: Level, config: AppConfig) -> (HttpServer, Arc<Logger>) {
    let logger = Arc::new(Logger::open(dir, level).unwrap());
    let server = HttpServer::new(config, Arc::clone(&logger));
    (server, logger)
}

/// Contents of the file the logger is currently writing.
#[allow(dead_code)]
pub fn current_log(logger: &Logger) -> String {
    fs::read_to_string(logger.path().join(logger.filename())).unwrap()
}
