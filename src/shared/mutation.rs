/**
 * Mutation Data Structures
 *
 * This module defines the mutation request decoded from POST /dev/mutations
 * bodies, the typed mutation operation, and the point-edit algorithm that
 * derives a conversation's next text from its current text.
 *
 * The operation payload arrives as semi-structured JSON and is validated
 * into `MutationOp` before it ever reaches the store. The raw payload is
 * also what gets persisted (merged with `author`/`origin`) as the
 * conversation's `lastMutation` audit record.
 */
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::SharedError;

/// A request to mutate a single conversation
///
/// This is the wire shape of a POST `/dev/mutations` body. The target
/// conversation is created on first use: mutating an unseen
/// `conversationId` seeds a new document instead of failing.
///
/// # Fields
/// * `conversation_id` - Target conversation id (required, non-empty)
/// * `data` - The operation payload; validated into [`MutationOp`]
/// * `author` - Opaque metadata merged into the stored audit record
/// * `origin` - Opaque metadata merged into the stored audit record
///
/// All fields are optional at the serde level so that malformed requests
/// reach [`MutationRequest::validate`] and produce the API's own
/// validation failures rather than a decoder rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    /// Target conversation id
    pub conversation_id: Option<String>,
    /// Raw operation payload, e.g. `{"type":"insert","index":5,"text":","}`
    pub data: Option<Value>,
    /// Opaque author metadata, not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    /// Opaque origin metadata, not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Value>,
}

impl MutationRequest {
    /// Check the request's required fields
    ///
    /// Returns the conversation id and the raw operation payload when both
    /// are present. An absent or empty `conversationId`, or an absent or
    /// `null` `data`, is a validation failure; validation never touches
    /// the store.
    pub fn validate(&self) -> Result<(&str, &Value), SharedError> {
        let conversation_id = match self.conversation_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(SharedError::validation(
                    "conversationId",
                    "Missing conversationId",
                ))
            }
        };

        match &self.data {
            Some(data) if !data.is_null() => Ok((conversation_id, data)),
            _ => Err(SharedError::validation("data", "Missing data")),
        }
    }
}

/// A single point-edit operation on a conversation's text
///
/// This is the typed form of the `data` payload. Indices are character
/// offsets into the current text (Unicode scalar values, not bytes), so an
/// edit can never split a code point.
///
/// # Example
/// ```rust
/// use avacollab::shared::MutationOp;
///
/// let op = MutationOp::Insert { index: 5, text: ",".to_string() };
/// assert_eq!(op.apply("hello world"), "hello, world");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MutationOp {
    /// Splice `text` into the document at character offset `index`
    Insert { index: usize, text: String },
    /// Remove `length` characters starting at character offset `index`
    Delete { index: usize, length: usize },
}

impl MutationOp {
    /// Validate a raw `data` payload into a typed operation
    ///
    /// Any `type` outside `insert`/`delete`, and any missing or mistyped
    /// variant field, is rejected here - before the mutation reaches the
    /// store in any form.
    pub fn parse(data: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(data.clone())
    }

    /// Derive the next document text from the current text
    ///
    /// Out-of-range offsets clamp to the current text length: an insert
    /// past the end appends, a delete past the end removes nothing, and a
    /// delete overlapping the end truncates to the tail.
    pub fn apply(&self, current: &str) -> String {
        match self {
            Self::Insert { index, text } => {
                let at = byte_offset(current, *index);
                let mut next = String::with_capacity(current.len() + text.len());
                next.push_str(&current[..at]);
                next.push_str(text);
                next.push_str(&current[at..]);
                next
            }
            Self::Delete { index, length } => {
                let start = byte_offset(current, *index);
                let end = byte_offset(current, index.saturating_add(*length));
                let mut next = String::with_capacity(current.len() - (end - start));
                next.push_str(&current[..start]);
                next.push_str(&current[end..]);
                next
            }
        }
    }

    /// Initial document content when this operation creates a conversation
    ///
    /// The first mutation for an unseen id seeds the document: an insert
    /// seeds with its full `text` (the index is ignored on creation), a
    /// delete seeds with the empty string.
    pub fn seed_text(&self) -> &str {
        match self {
            Self::Insert { text, .. } => text,
            Self::Delete { .. } => "",
        }
    }

    /// Build the `lastMutation` audit payload for this operation
    ///
    /// The stored record is the operation payload with the request's
    /// `author` and `origin` merged in. Absent metadata stays absent
    /// rather than being written as `null`.
    pub fn audit_payload(&self, author: Option<&Value>, origin: Option<&Value>) -> Value {
        let mut payload = Map::new();
        match self {
            Self::Insert { index, text } => {
                payload.insert("type".to_string(), Value::from("insert"));
                payload.insert("index".to_string(), Value::from(*index as u64));
                payload.insert("text".to_string(), Value::from(text.as_str()));
            }
            Self::Delete { index, length } => {
                payload.insert("type".to_string(), Value::from("delete"));
                payload.insert("index".to_string(), Value::from(*index as u64));
                payload.insert("length".to_string(), Value::from(*length as u64));
            }
        }

        if let Some(author) = author {
            payload.insert("author".to_string(), author.clone());
        }
        if let Some(origin) = origin {
            payload.insert("origin".to_string(), origin.clone());
        }

        Value::Object(payload)
    }
}

/// Response body for a successful mutation (HTTP 201)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub ok: bool,
    /// The full derived document text after the mutation
    pub text: String,
}

/// Map a character offset to a UTF-8 byte offset, clamping past-the-end
/// values to the text length.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
