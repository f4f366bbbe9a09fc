/**
 * Server Initialization
 *
 * This module creates the Axum application: it loads the database pool,
 * builds the shared state, and assembles the router.
 */

use axum::Router;
use sqlx::PgPool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create the Axum app from configuration
///
/// Connects the database pool (lazily) and runs migrations, then builds
/// the router with all `/dev` routes configured.
pub async fn create_app(config: &AppConfig) -> Router {
    let db_pool = load_database(config).await;
    create_app_with_pool(db_pool)
}

/// Create the Axum app around an existing pool
///
/// Used by tests that bring their own database (or a deliberately
/// unreachable one).
pub fn create_app_with_pool(db_pool: PgPool) -> Router {
    create_router(AppState { db_pool })
}
