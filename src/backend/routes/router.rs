/**
 * Router Configuration
 *
 * This module provides the main router creation function that wires the
 * `/dev` API surface to its handlers.
 *
 * # Routes
 *
 * - `GET /dev` - liveness (same handler as `/dev/ping`)
 * - `GET /dev/ping` - liveness
 * - `GET /dev/info` - static service metadata
 * - `GET /dev/conversations` - list conversations, ordered by id
 * - `POST /dev/mutations` - apply a mutation to a conversation
 *
 * # CORS
 *
 * The router carries a permissive CORS layer; the API has no
 * authentication and is meant to be called directly from browser
 * frontends.
 */

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::conversation::handlers;
use crate::backend::server::state::AppState;

/// Base path for all API routes
pub const BASE_PATH: &str = "/dev";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route(BASE_PATH, get(handlers::ping))
        .route(&format!("{}/ping", BASE_PATH), get(handlers::ping))
        .route(&format!("{}/info", BASE_PATH), get(handlers::info))
        .route(
            &format!("{}/conversations", BASE_PATH),
            get(handlers::list_conversations),
        )
        .route(
            &format!("{}/mutations", BASE_PATH),
            post(handlers::post_mutation),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
