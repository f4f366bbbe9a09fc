//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```
//! server/
//! ├── mod.rs     - Module exports
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Database pool construction and migrations
//! └── init.rs    - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration loading**: `AppConfig::from_env` reads the `DB_*`
//!    and `PORT` variables with their defaults.
//! 2. **Pool construction**: a lazy sqlx pool is built from the database
//!    configuration; migrations are attempted at startup.
//! 3. **Router creation**: the `/dev` routes are assembled around the
//!    shared [`state::AppState`].

/// Application state management
pub mod state;

/// Database bootstrap
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
