//! User account and friend endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{hash_password_async, issue_token, Claims};
use crate::errors::ErrorCode;
use crate::handlers::{
    bad_request, created, first_missing, internal_error, missing_param_message, ok,
    rejection_message, ApiResponse,
};
use crate::http::server::AppState;
use crate::models::User;
use crate::{log_debug, log_error, log_info, log_warn};

/// `POST /api/users/register`
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResponse {
    let Json(mut user) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log_warn!(state.logger, "Register rejected: {}", rejection.body_text());
            return bad_request(ErrorCode::InvalidUserInput, rejection_message(&rejection));
        }
    };

    if let Some(name) = first_missing(&[
        ("email", user.email.as_str()),
        ("password", user.password.as_str()),
        ("name", user.name.as_str()),
    ]) {
        log_warn!(state.logger, "Register rejected: missing {}", name);
        return bad_request(ErrorCode::InvalidUserInput, missing_param_message(name));
    }

    let password = std::mem::take(&mut user.password);
    user.password = match hash_password_async(password, state.config.auth.bcrypt_cost).await {
        Ok(hash) => hash,
        Err(e) => {
            log_error!(state.logger, "Password hashing failed for {}: {}", user.email, e);
            return internal_error(ErrorCode::FailedToHashPassword);
        }
    };

    let now = Utc::now();
    user.created_at = Some(now);
    user.updated_at = Some(now);
    log_info!(state.logger, "User registered: email={}, name={}", user.email, user.name);
    created(user)
}

/// `POST /api/users/login`
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResponse {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log_warn!(state.logger, "Login rejected: {}", rejection.body_text());
            return bad_request(ErrorCode::InvalidUserInput, rejection_message(&rejection));
        }
    };

    if let Some(name) = first_missing(&[
        ("email", input.email.as_str()),
        ("password", input.password.as_str()),
    ]) {
        log_warn!(state.logger, "Login rejected: missing {}", name);
        return bad_request(ErrorCode::InvalidUserInput, missing_param_message(name));
    }

    let now = Utc::now();
    let claims = Claims::for_user(&input, now, state.config.auth.token_ttl());
    let token = match issue_token(&claims, &state.config.auth.jwt_secret) {
        Ok(token) => token,
        Err(e) => {
            log_error!(state.logger, "Token generation failed for {}: {}", input.email, e);
            return internal_error(ErrorCode::FailedToGenerateToken);
        }
    };

    log_info!(state.logger, "Login: email={}", input.email);
    ok(json!({
        "token": token,
        "email": input.email,
        "name": input.name,
        "role": input.role,
        "last_login_at": now,
    }))
}

/// `GET /api/users/get/{id}`
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_debug!(state.logger, "Get user: id={}", id);
    ok(json!({ "id": id, "message": "user details" }))
}

/// `PUT /api/users/update/{id}`
pub async fn update_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_info!(state.logger, "Update user: id={}", id);
    ok("user updated")
}

#[derive(Debug, Deserialize)]
pub struct FriendRequest {
    pub friend_id: String,
}

/// `POST /api/users/friends/add/{id}`
pub async fn add_friend(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<FriendRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log_warn!(state.logger, "Add friend rejected for {}: {}", id, rejection.body_text());
            return bad_request(ErrorCode::InvalidUserInput, rejection_message(&rejection));
        }
    };

    if request.friend_id.trim().is_empty() {
        return bad_request(ErrorCode::InvalidUserInput, missing_param_message("friend_id"));
    }

    log_info!(state.logger, "Add friend: user={}, friend={}", id, request.friend_id);
    ok(json!({ "id": id, "friend_id": request.friend_id }))
}

/// `GET /api/users/friends/list/{id}`
pub async fn get_friends(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_debug!(state.logger, "List friends: id={}", id);
    ok("friends list")
}
