//! Credentials for user accounts.
//!
//! # Responsibilities
//! - Hash passwords at registration (bcrypt)
//! - Issue signed session tokens at login (HS256 JWT)
//!
//! # Design Decisions
//! - Hashing runs on the blocking pool, never on a runtime worker
//! - Secret, lifetime and work factor come from `AuthConfig`

pub mod password;
pub mod token;

pub use password::{hash_password, hash_password_async};
pub use token::{issue_token, Claims};

/// Failures while producing credentials.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

pub type AuthResult<T> = Result<T, AuthError>;
