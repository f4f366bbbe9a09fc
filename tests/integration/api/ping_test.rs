//! API surface tests that do not need a database
//!
//! Liveness and info are static; the conversations read path and the
//! mutation pre-store failure paths are exercised against a deliberately
//! unreachable pool.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::server::{create_test_server, unreachable_pool};

#[tokio::test]
async fn test_ping() {
    let server = create_test_server(unreachable_pool());

    let response = server.get("/dev/ping").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body, json!({"ok": true, "msg": "pong"}));
}

#[tokio::test]
async fn test_base_path_also_pongs() {
    let server = create_test_server(unreachable_pool());

    let response = server.get("/dev").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["msg"], "pong");
}

#[tokio::test]
async fn test_info() {
    let server = create_test_server(unreachable_pool());

    let response = server.get("/dev/info").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["language"], "rust");
    assert!(body["author"].is_object());
    assert!(body["frontend"].is_object());
    assert!(body["sources"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server(unreachable_pool());

    let response = server.get("/dev/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_conversations_store_failure_is_unknown_error() {
    let server = create_test_server(unreachable_pool());

    let response = server.get("/dev/conversations").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"ok": false, "text": "unknown error"})
    );
}

#[tokio::test]
async fn test_mutation_missing_conversation_id() {
    let server = create_test_server(unreachable_pool());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "data": {"type": "insert", "index": 0, "text": "hello"},
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    // The descriptive message is suppressed on the validation path.
    assert_eq!(response.json::<Value>(), json!({"ok": false}));
}

#[tokio::test]
async fn test_mutation_empty_conversation_id() {
    let server = create_test_server(unreachable_pool());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "",
            "data": {"type": "insert", "index": 0, "text": "hello"},
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"ok": false}));
}

#[tokio::test]
async fn test_mutation_missing_data() {
    let server = create_test_server(unreachable_pool());

    let response = server
        .post("/dev/mutations")
        .json(&json!({"conversationId": "doc-1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"ok": false}));
}

#[tokio::test]
async fn test_mutation_unrecognized_type() {
    let server = create_test_server(unreachable_pool());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "doc-1",
            "data": {"type": "replace", "index": 0, "text": "hello"},
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    let text = body["text"].as_str().expect("unknown operations carry a message");
    assert!(text.contains("replace"));
}

#[tokio::test]
async fn test_mutation_store_failure_carries_message() {
    let server = create_test_server(unreachable_pool());

    let response = server
        .post("/dev/mutations")
        .json(&json!({
            "conversationId": "doc-1",
            "data": {"type": "insert", "index": 0, "text": "hello"},
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(body["text"].is_string());
}
