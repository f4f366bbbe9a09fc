/**
 * Mutation Processor
 *
 * This module implements the mutation-application protocol: it validates
 * an incoming mutation request, serializes it against concurrent mutations
 * on the same conversation, derives the new document text, and persists
 * the new state transactionally.
 *
 * # Protocol
 *
 * 1. Validate the request and parse the operation payload - both before
 *    any store access.
 * 2. Begin a transaction and fetch the conversation row with
 *    `SELECT ... FOR UPDATE`, blocking behind any in-flight mutation on
 *    the same id.
 * 3. Branch on presence:
 *    - absent row: create the conversation, seeded from the operation
 *    - present row: apply the edit to the current text and update
 * 4. Commit and return the derived text.
 *
 * # Failure Semantics
 *
 * Any error after `begin()` abandons the transaction; sqlx rolls an
 * uncommitted transaction back when the handle drops, so no partial write
 * is ever observable. Exactly one row insert or one row update happens per
 * successful call; zero writes happen on every failure path. The processor
 * never retries - retry is the caller's responsibility.
 */

use sqlx::PgPool;

use crate::backend::conversation::db;
use crate::backend::error::BackendError;
use crate::shared::{MutationOp, MutationRequest};

/// Apply one mutation to its target conversation
///
/// Returns the full derived document text on success. The pool handle is
/// injected by the caller; the processor checks out a connection for the
/// duration of one transaction and holds no other state.
pub async fn apply_mutation(
    pool: &PgPool,
    request: &MutationRequest,
) -> Result<String, BackendError> {
    let (conversation_id, data) = request.validate()?;
    let op = MutationOp::parse(data)
        .map_err(|err| BackendError::unknown_operation(err.to_string()))?;
    let last_mutation = op.audit_payload(request.author.as_ref(), request.origin.as_ref());

    tracing::debug!(conversation_id, "applying mutation");

    let mut tx = pool.begin().await?;
    let locked = db::lock_conversation(&mut tx, conversation_id).await?;

    let text = match locked {
        None => {
            let seed = op.seed_text().to_owned();
            db::insert_conversation(&mut tx, conversation_id, &seed, &last_mutation).await?;
            seed
        }
        Some(current) => {
            let next = op.apply(&current.text);
            db::update_conversation(&mut tx, conversation_id, &next, &last_mutation).await?;
            next
        }
    };

    tx.commit().await?;
    Ok(text)
}
