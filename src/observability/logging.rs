//! Diagnostic logging via `tracing`.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for process diagnostics
//! - Honour `RUST_LOG`, falling back to a crate-level default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gobike_server=info,tower_http=info";

/// Install the global tracing subscriber writing to stderr.
///
/// Calling it twice leaves the first subscriber in place.
pub fn init_diagnostics() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
