//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration and report (but tolerate) validation problems
//! - Open the process-wide logger; failure here is fatal
//! - Record the startup banner and build metadata

use std::path::Path;
use std::sync::Arc;

use crate::config::{validate_config, AppConfig, ConfigError};
use crate::logger::{Level, Logger, LoggerError};
use crate::version::BUILD_INFO;
use crate::{log_info, log_trace, log_warn};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger initialization failed: {0}")]
    Logger(#[from] LoggerError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Load configuration from `path` (if present) and the environment.
pub fn load_configuration(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    let config = AppConfig::load(path)?;
    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            tracing::warn!(error = %e, "Invalid configuration");
        }
    }
    Ok(config)
}

/// Open the process-wide logger described by `config`.
pub fn init_logger(config: &AppConfig) -> Result<Arc<Logger>, StartupError> {
    let level = Level::from_name(&config.log.level);
    let logger = Logger::init(&config.log.dir, level)?;
    Ok(logger)
}

/// Write the startup banner, configuration summary and build metadata.
pub fn log_startup(logger: &Logger, config: &AppConfig) {
    log_info!(logger, "====================================");
    log_info!(logger, "Server initialization started");
    log_info!(logger, "====================================");
    log_trace!(
        logger,
        "Configuration loaded - Log level: {}, Directory: {}",
        config.log.level,
        logger.path().display()
    );
    if let Err(errors) = validate_config(config) {
        for e in errors {
            log_warn!(logger, "Invalid configuration: {}", e);
        }
    }

    log_info!(logger, "Version: {}", BUILD_INFO.version);
    log_info!(logger, "Git Revision: {}", BUILD_INFO.revision);
    log_info!(logger, "Build Date: {}", BUILD_INFO.build_date);
    log_info!(logger, "Rust Version: {}", BUILD_INFO.rustc);
    log_info!(logger, "Platform: {}", BUILD_INFO.platform);
}
