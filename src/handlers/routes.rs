//! Cycling route endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::errors::ErrorCode;
use crate::handlers::{bad_request, created, missing_param_message, ok, rejection_message, ApiResponse};
use crate::http::server::AppState;
use crate::models::Route;
use crate::{log_debug, log_info, log_warn};

/// `POST /api/routes/create`
pub async fn create_route(
    State(state): State<AppState>,
    body: Result<Json<Route>, JsonRejection>,
) -> ApiResponse {
    let Json(mut route) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log_warn!(state.logger, "Create route rejected: {}", rejection.body_text());
            return bad_request(ErrorCode::InvalidRoute, rejection_message(&rejection));
        }
    };

    if route.name.trim().is_empty() {
        log_warn!(state.logger, "Create route rejected: missing name");
        return bad_request(ErrorCode::InvalidRoute, missing_param_message("name"));
    }
    if route.distance < 0.0 {
        return bad_request(ErrorCode::InvalidRoute, "distance must not be negative");
    }

    let now = Utc::now();
    route.created_at = Some(now);
    route.updated_at = Some(now);
    log_info!(
        state.logger,
        "Route created: name={}, distance={:.2}km",
        route.name,
        route.distance
    );
    created(route)
}

/// `GET /api/routes/get/{id}`
pub async fn get_route(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_debug!(state.logger, "Get route: id={}", id);
    ok(json!({ "id": id }))
}

/// `PUT /api/routes/update/{id}`
pub async fn update_route(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_info!(state.logger, "Update route: id={}", id);
    ok("route updated")
}

/// `DELETE /api/routes/delete/{id}`
pub async fn delete_route(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_info!(state.logger, "Delete route: id={}", id);
    ok("route deleted")
}

/// `GET /api/routes/list/user/{user_id}`
pub async fn get_user_routes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse {
    log_debug!(state.logger, "List routes: user={}", user_id);
    ok(Vec::<Route>::new())
}
