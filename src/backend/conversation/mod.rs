//! Conversation Module
//!
//! This module contains the core of the backend: the mutation processor,
//! the PostgreSQL persistence layer, and the HTTP handlers for the `/dev`
//! API surface.
//!
//! # Module Structure
//!
//! ```
//! conversation/
//! ├── mod.rs        - Module exports
//! ├── processor.rs  - The mutation-application protocol
//! ├── db.rs         - sqlx queries (list, locked fetch, insert, update)
//! └── handlers.rs   - ping, info, conversations, mutations handlers
//! ```
//!
//! # Serialization of Concurrent Edits
//!
//! A conversation row is read with `SELECT ... FOR UPDATE` inside a
//! transaction, so at most one mutation per conversation is in flight at a
//! time. Whether the mutation creates or updates the conversation is
//! decided from that locked read, never from two unguarded statements.

/// The mutation-application protocol
pub mod processor;

/// Database operations for conversations
pub mod db;

/// HTTP handlers for the `/dev` API surface
pub mod handlers;
