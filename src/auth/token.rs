//! Session tokens.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::auth::AuthResult;
use crate::models::User;

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Option<String>,
    pub email: String,
    pub role: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Claims for `user`, expiring `ttl` after `issued_at`.
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: issued_at.timestamp().saturating_add(ttl_secs),
        }
    }
}

/// Sign `claims` with HS256 using `secret`.
pub fn issue_token(claims: &Claims, secret: &str) -> AuthResult<String> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), claims, &key)?)
}
