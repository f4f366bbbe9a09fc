//! Backend Module
//!
//! This module contains all server-side code for the AvaCollab application.
//! It provides an Axum HTTP server that applies point-edit mutations to
//! conversations stored in PostgreSQL.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - The `/dev` API surface (ping, info, conversations, mutations)
//! - The mutation processor (validate, lock, branch, commit)
//! - Database persistence (PostgreSQL via sqlx)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database bootstrap
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`conversation`** - The mutation processor, persistence, and handlers
//! - **`error`** - Backend-specific error types
//!
//! # Concurrency
//!
//! Requests are handled concurrently by the Axum runtime. The only shared
//! resource is the sqlx connection pool; mutations targeting the same
//! conversation serialize on the database row lock
//! (`SELECT ... FOR UPDATE`), not on any in-process mutex or queue.
//! Mutations targeting distinct conversations proceed fully concurrently.
//!
//! # Error Handling
//!
//! All failures are caught at the handler boundary. `BackendError`
//! implements `IntoResponse`, producing the API's `{ok:false, ...}` wire
//! shapes; nothing escapes as an unhandled fault and nothing is retried
//! automatically.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Conversation mutation processing and persistence
pub mod conversation;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::init::create_app;
