//! Password hashing.

use crate::auth::AuthResult;

/// bcrypt hash of `password` at the given work factor.
///
/// Fails for a cost outside `4..=31`.
pub fn hash_password(password: &str, cost: u32) -> AuthResult<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// [`hash_password`] on the blocking thread pool.
pub async fn hash_password_async(password: String, cost: u32) -> AuthResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost)).await?
}
