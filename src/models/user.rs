//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    /// Accepted on input, never echoed back.
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub phone: String,
    pub profile_image: String,
    pub friends: Vec<String>,
    pub subscription: Option<Subscription>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub status: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Subscription {
    pub plan_id: String,
    pub name: String,
    pub price: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub features: Vec<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_not_serialized() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw","name":"Ann"}"#).unwrap();
        assert_eq!(user.password, "pw");

        let out = serde_json::to_value(&user).unwrap();
        assert!(out.get("password").is_none());
        assert_eq!(out["email"], "a@b.c");
    }
}
