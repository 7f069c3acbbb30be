//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT, LOG_DIR, LOG_LEVEL, ...)
//!     → validation.rs (semantic checks)
//!     → AppConfig (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the server starts with no file at all
//! - Environment variables win over the file
//! - Validation collects every problem instead of stopping at the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, AuthConfig, DatabaseConfig, LogConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
