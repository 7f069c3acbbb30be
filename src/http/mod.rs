//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → /api/{users,routes,rides}/... → handlers
//!     → unknown path → 404 envelope
//!     → known path, wrong method → middleware → 405 envelope
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
