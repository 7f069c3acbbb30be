//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Application log settings.
    pub log: LogConfig,

    /// Document database connection settings.
    pub database: DatabaseConfig,

    /// Token signing and password hashing settings.
    pub auth: AuthConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces).
    pub port: u16,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Application log configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Directory receiving the daily log files.
    pub dir: String,

    /// Minimum level name (TRACE, DEBUG, INFO, WARN, ERROR, FATAL).
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            level: "DEBUG".to_string(),
        }
    }
}

/// Document database configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URI.
    pub uri: String,

    /// Database name.
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            name: "gobike".to_string(),
        }
    }
}

/// Token signing and password hashing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret for issued tokens.
    pub jwt_secret: String,
    /// Lifetime of an issued token.
    pub token_ttl_hours: u64,
    /// bcrypt work factor, 4 to 31.
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // WARNING: This is a placeholder! Change this in production.
            jwt_secret: "your-secret-key".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Token lifetime as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_hours.saturating_mul(3600))
    }
}
