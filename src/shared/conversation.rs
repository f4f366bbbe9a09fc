//! Conversation Data Structure
//!
//! Represents a persisted conversation document and the API response
//! shapes built from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted conversation document
///
/// The id is client-supplied on the first mutation and immutable afterwards.
/// `last_mutation` is the payload of the most recently applied mutation with
/// the request's `author`/`origin` merged in; it is audit data and is never
/// used to derive `text` on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Opaque conversation id
    pub id: String,
    /// Current full document content
    pub text: String,
    /// Payload of the most recently applied mutation
    pub last_mutation: Value,
}

/// Response body for GET `/dev/conversations`
///
/// Conversations are always ordered by ascending id, regardless of
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConversationsResponse {
    pub ok: bool,
    pub conversations: Vec<Conversation>,
}

/// Response body for GET `/dev/ping` (and the base path itself)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    pub ok: bool,
    pub msg: String,
}

impl PingResponse {
    /// The canonical liveness reply
    pub fn pong() -> Self {
        Self {
            ok: true,
            msg: "pong".to_string(),
        }
    }
}
