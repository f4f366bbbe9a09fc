/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * A required field of the mutation request is missing (`conversationId`,
 * `data`). These fail before any store access.
 *
 * ## Unknown Operation Errors
 *
 * The `data` payload does not describe a recognized operation: its `type`
 * is outside insert/delete, or a variant field is missing or mistyped.
 * These also fail before any store access.
 *
 * ## Store Errors
 *
 * Any failure connecting to, querying, or locking within PostgreSQL.
 * On the write path the enclosing transaction is abandoned, so no partial
 * write is ever observable.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur while serving
/// a request. Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use avacollab::backend::error::BackendError;
///
/// let err = BackendError::unknown_operation("unknown variant `replace`");
/// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required request field is missing
    ///
    /// Raised by request validation before the store is touched. The
    /// response body for this variant deliberately carries no message.
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The `data` payload is not a recognized mutation operation
    #[error("{message}")]
    UnknownOperation {
        /// Human-readable error message
        message: String,
    },

    /// A database failure (connectivity, query, constraint, or lock)
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new unknown-operation error
    pub fn unknown_operation(message: impl Into<String>) -> Self {
        Self::UnknownOperation {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Every failure of the mutation and listing paths surfaces as
    /// 400 Bad Request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnknownOperation { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the response body suppresses the message
    ///
    /// Validation failures respond with a bare `{ok:false}`; the
    /// descriptive text stays server-side.
    pub fn suppresses_message(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
