//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject values the server cannot run with
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.port == 0 {
        errors.push(ValidationError {
            field: "server.port",
            message: "port must be non-zero",
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "server.request_timeout_secs",
            message: "timeout must be positive",
        });
    }
    if config.log.dir.trim().is_empty() {
        errors.push(ValidationError {
            field: "log.dir",
            message: "log directory is required",
        });
    }
    if config.database.uri.trim().is_empty() {
        errors.push(ValidationError {
            field: "database.uri",
            message: "MONGO_URI is required",
        });
    }
    if config.auth.jwt_secret.is_empty() {
        errors.push(ValidationError {
            field: "auth.jwt_secret",
            message: "JWT_SECRET is required",
        });
    }
    if config.auth.token_ttl_hours == 0 {
        errors.push(ValidationError {
            field: "auth.token_ttl_hours",
            message: "token lifetime must be positive",
        });
    }
    if !(4..=31).contains(&config.auth.bcrypt_cost) {
        errors.push(ValidationError {
            field: "auth.bcrypt_cost",
            message: "bcrypt cost must be between 4 and 31",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
