//! Application configuration module
//!
//! Provides the runtime configuration loaded from environment variables.
//!
//! # Recognized variables
//!
//! | Variable | Default |
//! |---|---|
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5432` |
//! | `DB_NAME` | `ava` |
//! | `DB_USER` | empty |
//! | `DB_PASSWORD` | empty |
//! | `PORT` | `3000` |
//!
//! Unset variables fall back to their defaults; so do values that fail to
//! parse (a malformed `DB_PORT` must not abort startup).

use std::env;

/// Runtime configuration for the server and its database connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database host
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// Database user; empty means the driver default
    pub db_user: String,
    /// Database password; empty means none
    pub db_password: String,
    /// HTTP listen port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_name: "ava".to_string(),
            db_user: String::new(),
            db_password: String::new(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_host: env::var("DB_HOST").unwrap_or(defaults.db_host),
            db_port: env_u16("DB_PORT", defaults.db_port),
            db_name: env::var("DB_NAME").unwrap_or(defaults.db_name),
            db_user: env::var("DB_USER").unwrap_or(defaults.db_user),
            db_password: env::var("DB_PASSWORD").unwrap_or(defaults.db_password),
            port: env_u16("PORT", defaults.port),
        }
    }
}

/// Read a u16 environment variable, falling back to `default` when the
/// variable is unset or unparseable.
fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
