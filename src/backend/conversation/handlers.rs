//! Conversation HTTP Handlers
//!
//! This module contains the HTTP handlers for the `/dev` API surface:
//! liveness, service info, conversation listing, and mutation submission.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::PgPool;

use crate::backend::conversation::{db, processor};
use crate::backend::error::BackendError;
use crate::shared::{ListConversationsResponse, MutationRequest, MutationResponse, PingResponse};

/// Liveness check, served at the base path and `/ping`
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

/// Static service metadata
pub async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "author": {
            "email": "hello@avacollab.dev",
            "name": "AvaCollab"
        },
        "frontend": {
            "url": "string, the url of your frontend."
        },
        "language": "rust",
        "sources": "https://github.com/avacollab/avacollab"
    }))
}

/// List all conversations, ordered by ascending id
///
/// A store failure on this read path responds with the generic
/// `{ok:false, text:"unknown error"}` body; the underlying error is only
/// logged.
pub async fn list_conversations(State(pool): State<PgPool>) -> Response {
    match db::list_conversations(&pool).await {
        Ok(conversations) => Json(ListConversationsResponse {
            ok: true,
            conversations,
        })
        .into_response(),
        Err(err) => {
            tracing::error!("Failed to list conversations: {:?}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"ok": false, "text": "unknown error"})),
            )
                .into_response()
        }
    }
}

/// Apply a mutation to a conversation
///
/// Success responds with 201 and the derived text. Failures convert
/// through [`BackendError`]: validation failures to a bare `{ok:false}`,
/// everything else to `{ok:false, text:<message>}`, all with status 400.
pub async fn post_mutation(
    State(pool): State<PgPool>,
    Json(request): Json<MutationRequest>,
) -> Result<(StatusCode, Json<MutationResponse>), BackendError> {
    let text = processor::apply_mutation(&pool, &request)
        .await
        .map_err(|err| {
            tracing::error!("Mutation failed: {:?}", err);
            err
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse { ok: true, text }),
    ))
}
