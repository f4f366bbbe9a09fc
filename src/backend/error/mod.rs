//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP
//! responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Types
//!
//! - `Validation` - A required request field is missing
//! - `UnknownOperation` - The `data` payload is not a recognized operation
//! - `Store` - A database connectivity, query, or locking failure
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to
//! be returned directly from handlers. Every variant surfaces as HTTP 400;
//! validation failures respond with a bare `{ok:false}` body while the
//! other variants include the underlying message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
