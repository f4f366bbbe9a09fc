/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` trait for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application. It holds the sqlx connection pool - the only process-wide
 * resource the handlers share. There is no other in-process mutable
 * state: serialization of concurrent mutations is provided by database
 * row locking, not by anything held here.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract the pool directly
 * with `State(pool): State<PgPool>` instead of taking the whole
 * `AppState`, following Axum's recommended pattern.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL connection pool, created at startup and
///   injected into every handler; connections are checked out per request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
