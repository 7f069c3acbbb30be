//! Request handlers for the `/api` surface.
//!
//! # Responsibilities
//! - Decode and check request input
//! - Log each request through the application logger
//! - Answer with the `Response` envelope
//!
//! # Design Decisions
//! - Every handler returns `(StatusCode, Json<Response>)`
//! - Persistence is not wired in; handlers echo validated input

pub mod rides;
pub mod routes;
pub mod users;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};

use crate::errors::ErrorCode;
use crate::models::Response;

/// Status code plus envelope, as returned by every handler.
pub type ApiResponse = (StatusCode, Json<Response>);

pub(crate) fn ok(data: impl serde::Serialize) -> ApiResponse {
    (StatusCode::OK, Json(Response::success(data)))
}

pub(crate) fn created(data: impl serde::Serialize) -> ApiResponse {
    (StatusCode::CREATED, Json(Response::success(data)))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> ApiResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(Response::error_with_message(code, message)),
    )
}

pub(crate) fn internal_error(code: ErrorCode) -> ApiResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Response::error(code)),
    )
}

/// Name of the first field whose value is blank.
pub(crate) fn first_missing<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

pub(crate) fn missing_param_message(name: &str) -> String {
    format!("required parameter {} is missing", name)
}

pub(crate) fn rejection_message(rejection: &JsonRejection) -> String {
    format!("failed to parse request body: {}", rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_missing() {
        assert_eq!(first_missing(&[("email", "a@b.c"), ("name", "Ann")]), None);
        assert_eq!(first_missing(&[("email", "a@b.c"), ("password", " ")]), Some("password"));
        assert_eq!(first_missing(&[("email", ""), ("password", "")]), Some("email"));
    }
}
