//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Open logger → Log banner → Build router → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain (bounded) → Close logger → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: a logger that cannot open its directory aborts startup
//! - Shutdown has timeout: in-flight requests get a fixed grace period
//! - The logger closes last so the shutdown itself is recorded

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{DrainOutcome, Shutdown};
pub use signals::{wait_for_signal, Signal};
