//! Method-not-allowed middleware.
//! Rewrites the router's bare 405 into the API error envelope.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::ErrorCode;
use crate::http::server::AppState;
use crate::log_warn;
use crate::models;

pub async fn method_not_allowed_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allowed = response
        .headers()
        .get(header::ALLOW)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    log_warn!(state.logger, "Method {} not allowed on {}", method, path);

    let body = models::Response::error_with_message(
        ErrorCode::InvalidMethod,
        format!("method {} is not supported, allowed methods: {}", method, allowed),
    );
    let mut rewritten = (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response();
    if let Ok(value) = allowed.parse() {
        rewritten.headers_mut().insert(header::ALLOW, value);
    }
    rewritten
}
