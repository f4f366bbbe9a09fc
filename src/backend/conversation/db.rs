//! Database operations for conversations
//!
//! This module contains the sqlx queries against the `conversation` table.
//! The locked fetch, insert, and update run against a caller-owned
//! transaction so the processor controls the commit/rollback boundary.

use serde_json::Value;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::shared::Conversation;

/// List all conversations, ordered by ascending id
pub async fn list_conversations(pool: &PgPool) -> Result<Vec<Conversation>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, text, lastmutation
        FROM conversation
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Conversation {
            id: row.get("id"),
            text: row.get("text"),
            last_mutation: row.get("lastmutation"),
        })
        .collect())
}

/// Fetch a conversation row under an exclusive row lock
///
/// Blocks until any other in-flight mutation on the same id commits or
/// rolls back. An absent row is a normal result (the create path), not an
/// error.
pub async fn lock_conversation(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
) -> Result<Option<Conversation>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, text, lastmutation
        FROM conversation
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.map(|row| Conversation {
        id: row.get("id"),
        text: row.get("text"),
        last_mutation: row.get("lastmutation"),
    }))
}

/// Insert a new conversation row (creation-on-first-use)
pub async fn insert_conversation(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
    text: &str,
    last_mutation: &Value,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO conversation (id, text, lastmutation)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(last_mutation)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Update an existing conversation row with its derived text
pub async fn update_conversation(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
    text: &str,
    last_mutation: &Value,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE conversation
        SET text = $2, lastmutation = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(last_mutation)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
