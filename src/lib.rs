//! AvaCollab - Main Library
//!
//! AvaCollab is a small collaborative-text backend built with Rust. It stores
//! conversations (plain-text documents) in PostgreSQL and applies sequential
//! point-edit mutations (insert/delete at a character index) to them, using
//! row-level locking to serialize concurrent edits to the same document.
//!
//! # Overview
//!
//! This library provides the core functionality for AvaCollab, including:
//! - The mutation-application protocol (validate, lock, branch, commit)
//! - Creation-on-first-use conversation lifecycle
//! - An Axum HTTP server exposing the `/dev` API surface
//! - PostgreSQL persistence via sqlx with transactional row locking
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and API consumers
//!   - Mutation request/operation structures and the edit algorithm
//!   - Conversation records and response types
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server setup and the `/dev` router
//!   - The mutation processor and conversation persistence
//!   - Backend error types and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use avacollab::backend::server::init::create_app;
//! use avacollab::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::from_env();
//! let app = create_app(&config).await;
//! // Use app with an Axum server
//! # }
//! ```

pub mod backend;
pub mod shared;
