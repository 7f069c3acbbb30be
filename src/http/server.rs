//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, 405 envelope)
//! - Answer unknown paths with the API error envelope
//! - Bind server to listener and stop on the shutdown signal

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::errors::ErrorCode;
use crate::handlers::{rides, routes, users, ApiResponse};
use crate::http::middleware::method_not_allowed::method_not_allowed_middleware;
use crate::{log_info, log_warn};
use crate::logger::Logger;
use crate::models::Response;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<Logger>,
    pub config: Arc<AppConfig>,
}

/// HTTP server for the API.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
    logger: Arc<Logger>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and logger.
    pub fn new(config: AppConfig, logger: Arc<Logger>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            logger: Arc::clone(&logger),
            config: Arc::clone(&config),
        };

        let router = Self::build_router(&config, state);
        log_info!(logger, "All routes initialized");
        Self {
            router,
            config,
            logger,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .nest("/users", user_routes())
            .nest("/routes", route_routes())
            .nest("/rides", ride_routes());

        Router::new()
            .nest("/api", api)
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                method_not_allowed_middleware,
            ))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// A clone of the router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");
        log_info!(self.logger, "Starting server on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/get/{id}", get(users::get_user))
        .route("/update/{id}", put(users::update_user))
        .route("/friends/add/{id}", post(users::add_friend))
        .route("/friends/list/{id}", get(users::get_friends))
}

fn route_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(routes::create_route))
        .route("/get/{id}", get(routes::get_route))
        .route("/update/{id}", put(routes::update_route))
        .route("/delete/{id}", delete(routes::delete_route))
        .route("/list/user/{user_id}", get(routes::get_user_routes))
}

fn ride_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(rides::create_ride))
        .route("/get/{id}", get(rides::get_ride))
        .route("/update/{id}", put(rides::update_ride))
        .route("/delete/{id}", delete(rides::delete_ride))
        .route("/list/user/{user_id}", get(rides::get_user_rides))
        .route("/stats/{id}", get(rides::get_ride_stats))
}

/// Fallback for paths no route matches.
async fn not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> ApiResponse {
    log_warn!(state.logger, "Path not found: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(Response::error_with_message(
            ErrorCode::PathNotFound,
            format!("path {} not found", uri.path()),
        )),
    )
}
