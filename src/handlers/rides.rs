//! Ride record endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::json;

use crate::errors::ErrorCode;
use crate::handlers::{bad_request, created, missing_param_message, ok, rejection_message, ApiResponse};
use crate::http::server::AppState;
use crate::models::Ride;
use crate::{log_debug, log_info, log_warn};

/// `POST /api/rides/create`
pub async fn create_ride(
    State(state): State<AppState>,
    body: Result<Json<Ride>, JsonRejection>,
) -> ApiResponse {
    let Json(ride) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log_warn!(state.logger, "Create ride rejected: {}", rejection.body_text());
            return bad_request(ErrorCode::FailedToCreateRide, rejection_message(&rejection));
        }
    };

    if ride.user_id.trim().is_empty() {
        log_warn!(state.logger, "Create ride rejected: missing user_id");
        return bad_request(ErrorCode::MissingParams, missing_param_message("user_id"));
    }
    if let (Some(start), Some(end)) = (ride.start_time, ride.end_time) {
        if end < start {
            return bad_request(ErrorCode::FailedToCreateRide, "end_time precedes start_time");
        }
    }

    log_info!(
        state.logger,
        "Ride created: user={}, distance={:.2}km, points={}",
        ride.user_id,
        ride.distance,
        ride.locations.len()
    );
    created(ride)
}

/// `GET /api/rides/get/{id}`
pub async fn get_ride(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_debug!(state.logger, "Get ride: id={}", id);
    ok(json!({ "id": id }))
}

/// `PUT /api/rides/update/{id}`
pub async fn update_ride(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_info!(state.logger, "Update ride: id={}", id);
    ok("ride updated")
}

/// `DELETE /api/rides/delete/{id}`
pub async fn delete_ride(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_info!(state.logger, "Delete ride: id={}", id);
    ok("ride deleted")
}

/// `GET /api/rides/list/user/{user_id}`
pub async fn get_user_rides(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse {
    log_debug!(state.logger, "List rides: user={}", user_id);
    ok(Vec::<Ride>::new())
}

/// `GET /api/rides/stats/{id}`
pub async fn get_ride_stats(State(state): State<AppState>, Path(id): Path<String>) -> ApiResponse {
    log_debug!(state.logger, "Ride stats: id={}", id);
    ok(json!({ "id": id, "distance": 0.0, "duration_secs": 0, "avg_speed": 0.0 }))
}
