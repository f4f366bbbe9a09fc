/**
 * Database Bootstrap
 *
 * This module builds the PostgreSQL connection pool from the application
 * configuration and runs migrations at startup.
 *
 * # Error Handling
 *
 * Pool construction is lazy: the server starts even when the database is
 * unreachable, and store failures then surface per request as 400
 * responses. Migration errors are logged but do not prevent startup.
 */

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::shared::AppConfig;

/// Build the connection pool and run migrations
///
/// The pool connects lazily, so this never fails on an unreachable
/// database; the first request needing a connection reports the store
/// error instead.
pub async fn load_database(config: &AppConfig) -> PgPool {
    let mut options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name);
    if !config.db_user.is_empty() {
        options = options.username(&config.db_user);
    }
    if !config.db_password.is_empty() {
        options = options.password(&config.db_password);
    }

    tracing::info!(
        "Using database {} at {}:{}",
        config.db_name,
        config.db_host,
        config.db_port
    );

    let pool = PgPoolOptions::new().connect_lazy_with(options);

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(err) => {
            tracing::error!("Failed to run database migrations: {:?}", err);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    pool
}
