//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and API consumers. These types are used for serialization and
//! communication over the HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP.

/// Mutation request/operation structures and the edit algorithm
pub mod mutation;

/// Conversation records and list responses
pub mod conversation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use conversation::{Conversation, ListConversationsResponse, PingResponse};
pub use error::SharedError;
pub use mutation::{MutationOp, MutationRequest, MutationResponse};
