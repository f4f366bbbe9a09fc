//! Mutation API tests against a live database
//!
//! These tests exercise the full HTTP + transaction path and require a
//! reachable PostgreSQL instance (DATABASE_URL, falling back to the local
//! ava_test database).

use axum::http::StatusCode;
use serde_json::{json, Value};
use serial_test::serial;

use crate::common::database::TestDatabase;
use crate::common::server::create_test_server;

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_first_mutation_creates_conversation() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "created",
            "data": {"type": "insert", "index": 0, "text": "hello"},
            "author": "alice",
            "origin": "test",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), json!({"ok": true, "text": "hello"}));
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_insert_and_delete_round() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    // Seed
    server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "doc",
            "data": {"type": "insert", "index": 0, "text": "hello world"},
        }))
        .await;

    // Insert a comma
    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "doc",
            "data": {"type": "insert", "index": 5, "text": ","},
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["text"], "hello, world");

    // Delete it again
    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "doc",
            "data": {"type": "delete", "index": 5, "length": 1},
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["text"], "hello world");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_listing_orders_by_id() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    // Insert out of order
    for id in ["b-doc", "a-doc", "c-doc"] {
        server
            .post("/dev/mutations")
            .json(&json!({
                "conversationId": id,
                "data": {"type": "insert", "index": 0, "text": id},
            }))
            .await;
    }

    let response = server.get("/dev/conversations").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    let ids: Vec<&str> = body["conversations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a-doc", "b-doc", "c-doc"]);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_last_mutation_is_returned_with_metadata() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "audited",
            "data": {"type": "insert", "index": 0, "text": "hi"},
            "author": "alice",
            "origin": {"client": "web"},
        }))
        .await;

    let response = server.get("/dev/conversations").await;
    let body: Value = response.json();
    let conversation = &body["conversations"][0];
    assert_eq!(
        conversation["lastMutation"],
        json!({
            "type": "insert",
            "index": 0,
            "text": "hi",
            "author": "alice",
            "origin": {"client": "web"},
        })
    );
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_validation_failure_writes_nothing() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "data": {"type": "insert", "index": 0, "text": "hello"},
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversation")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_unrecognized_type_leaves_row_unchanged() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "stable",
            "data": {"type": "insert", "index": 0, "text": "untouched"},
        }))
        .await;

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "stable",
            "data": {"type": "replace", "index": 0, "text": "overwritten"},
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let text: String = sqlx::query_scalar("SELECT text FROM conversation WHERE id = 'stable'")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(text, "untouched");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database
async fn test_concurrent_mutations_serialize() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let server = create_test_server(db.pool().clone());

    // Seed the document first so both racers take the update path.
    server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "raced",
            "data": {"type": "insert", "index": 0, "text": "x"},
        }))
        .await;

    let first = server.post("/dev/mutations").json(&json!({
        "conversationId": "raced",
        "data": {"type": "insert", "index": 0, "text": "a"},
    }));
    let second = server.post("/dev/mutations").json(&json!({
        "conversationId": "raced",
        "data": {"type": "insert", "index": 0, "text": "b"},
    }));

    let (first, second) = tokio::join!(first, second);
    assert_eq!(first.status_code(), StatusCode::CREATED);
    assert_eq!(second.status_code(), StatusCode::CREATED);

    // Both edits applied in some serial order - never a lost update.
    let text: String = sqlx::query_scalar("SELECT text FROM conversation WHERE id = 'raced'")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert!(text == "abx" || text == "bax", "unexpected final text: {}", text);
}
