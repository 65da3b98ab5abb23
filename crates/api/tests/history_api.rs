//! Integration tests for the history endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

use std::sync::Arc;

use scenegen_backend::StubBackend;
use scenegen_db::MemoryStore;

fn entry_body(prompt: &str) -> serde_json::Value {
    json!({
        "prompt": prompt,
        "json": {
            "scene": prompt,
            "camera": { "angle": "front" },
            "lighting": { "type": "soft" },
            "color_palette": { "preset": "natural" }
        },
        "imageUrl": "https://img.example/x.png"
    })
}

#[tokio::test]
async fn empty_history_lists_nothing() {
    let app = common::build_test_app();
    let response = get(app, "/api/history").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["history"], json!([]));
}

#[tokio::test]
async fn add_returns_entry_with_id_and_timestamp() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/history/add", entry_body("a warm beach")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["entry"]["id"], 1);
    assert_eq!(body["entry"]["prompt"], "a warm beach");
    assert_eq!(body["entry"]["imageUrl"], "https://img.example/x.png");
    assert!(body["entry"]["createdAt"].is_string());
}

#[tokio::test]
async fn add_then_list_preserves_order_and_ids() {
    // One store shared across requests; the router is cheap to clone.
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with(Arc::new(StubBackend::default()), store);

    for prompt in ["first", "second", "third"] {
        let response = post_json(app.clone(), "/api/history/add", entry_body(prompt)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/api/history").await;
    let body = body_json(response).await;

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    let ids: Vec<_> = history.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
    let prompts: Vec<_> = history.iter().map(|e| e["prompt"].as_str().unwrap()).collect();
    assert_eq!(prompts, ["first", "second", "third"]);
}

#[tokio::test]
async fn consecutive_lists_are_identical() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with(Arc::new(StubBackend::default()), store);

    post_json(app.clone(), "/api/history/add", entry_body("only")).await;

    let first = body_json(get(app.clone(), "/api/history").await).await;
    let second = body_json(get(app, "/api/history").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn generation_appears_in_history() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with(Arc::new(StubBackend::default()), store);

    let response = post_json(
        app.clone(),
        "/api/generate",
        json!({ "prompt": "a wide river landscape" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(get(app, "/api/history").await).await;
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["prompt"], "a wide river landscape");
}
