//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Application events (requests, startup, shutdown)
//!     → crate::logger (daily files, caller-attributed)
//!
//! Process diagnostics (HTTP traces, logger fallback reports)
//!     → logging.rs (tracing subscriber → stderr)
//! ```
//!
//! # Design Decisions
//! - The application log never depends on the diagnostics stream
//! - Logger failures surface here instead of panicking the request path

pub mod logging;
