/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from Axum handlers.
 *
 * # Response Format
 *
 * Error responses are returned as JSON. Validation failures produce a bare
 * body with the descriptive message suppressed:
 * ```json
 * {"ok": false}
 * ```
 * All other failures include the underlying message:
 * ```json
 * {"ok": false, "text": "unknown variant `replace`, expected `insert` or `delete`"}
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// The status code comes from [`BackendError::status_code`]; the body
    /// carries the error message except for validation failures, whose
    /// detail stays server-side.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if self.suppresses_message() {
            json!({"ok": false})
        } else {
            json!({"ok": false, "text": self.message()})
        };

        (status, Json(body)).into_response()
    }
}
