//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    Env { key: &'static str, value: String },
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

impl AppConfig {
    /// Load configuration the way the server does at startup.
    ///
    /// Reads `path` when it exists (a missing file only warns), then applies
    /// overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if p.exists() => load_config(p)?,
            Some(p) => {
                tracing::warn!(path = %p.display(), "Config file not found, using defaults");
                AppConfig::default()
            }
            None => AppConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from environment-style variables.
    ///
    /// `lookup` returns the value of a variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Env { key: "PORT", value: port })?;
        }
        if let Some(dir) = lookup("LOG_DIR") {
            self.log.dir = dir;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(uri) = lookup("MONGO_URI") {
            self.database.uri = uri;
        }
        if let Some(name) = lookup("DB_NAME") {
            self.database.name = name;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        Ok(())
    }
}
