//! gobike API server library.
//!
//! The application log is written by [`logger::Logger`]: one file per day,
//! leveled, caller-attributed, safe to share across request handlers.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod logger;
pub mod models;
pub mod observability;
pub mod version;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use logger::{Level, Logger};
