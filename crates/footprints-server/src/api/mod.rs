//! API module for the Footprints service

pub mod auth;
pub mod error;
pub mod handlers;
pub mod view;

use axum::{
    extract::State,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness check response
#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub footprint_count: usize,
}

/// Health check endpoint
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Readiness check endpoint
///
/// GET /ready
pub async fn ready(State(state): State<Arc<AppState>>) -> Json<ReadyResponse> {
    let footprint_count = state
        .store
        .list_footprints()
        .await
        .map(|v| v.len())
        .unwrap_or(0);

    Json(ReadyResponse {
        ready: true,
        footprint_count,
    })
}

/// Create the API router
///
/// The health endpoints are public; the entire footprints router sits behind
/// the authorization gate with no per-route variation.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route(
            "/footprints",
            get(handlers::list_footprints).post(handlers::create_footprint),
        )
        .route(
            "/footprints/{id}",
            get(handlers::get_footprint)
                .put(handlers::update_footprint)
                .delete(handlers::delete_footprint),
        )
        .route("/footprints/{id}/comments", post(handlers::create_comment))
        .route(
            "/footprints/{id}/comments/{comment_id}",
            put(handlers::update_comment).delete(handlers::delete_comment),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_principal,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .merge(protected)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
