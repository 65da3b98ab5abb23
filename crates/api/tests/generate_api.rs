//! Integration tests for the generation endpoints.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, build_test_app_with, post_json};
use serde_json::json;

use scenegen_backend::{BackendError, GeneratedImage, GenerationBackend, ImageRequest};
use scenegen_db::{HistoryStore, MemoryStore};

/// Backend that always fails with an upstream payload.
struct FailingBackend;

#[async_trait]
impl GenerationBackend for FailingBackend {
    async fn generate_image(
        &self,
        _request: ImageRequest<'_>,
    ) -> Result<GeneratedImage, BackendError> {
        Err(BackendError::Api {
            status: 429,
            body: r#"{"error":"rate limited"}"#.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// POST /api/generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_completed_with_descriptor() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(
        Arc::new(scenegen_backend::StubBackend::default()),
        store.clone(),
    );

    let response = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "a wide dramatic vibrant forest" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "completed");
    assert!(!body["image"].as_str().unwrap().is_empty());
    assert_eq!(body["json"]["camera"]["angle"], "wide");
    assert_eq!(body["json"]["lighting"]["type"], "dramatic");
    assert_eq!(body["json"]["color_palette"]["preset"], "vibrant");

    // Exactly one ledger entry, matching prompt and descriptor.
    let history = store.list_all().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].prompt, "a wide dramatic vibrant forest");
    assert_eq!(
        serde_json::to_value(&history[0].json).unwrap(),
        body["json"]
    );
}

#[tokio::test]
async fn generate_rejects_empty_prompt() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/generate", json!({ "prompt": "" })).await;
    common::assert_validation_error(response).await;
}

#[tokio::test]
async fn generate_rejects_missing_prompt() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/generate", json!({})).await;
    common::assert_validation_error(response).await;
}

#[tokio::test]
async fn generate_upstream_failure_returns_502_and_no_history() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(Arc::new(FailingBackend), store.clone());

    let response = post_json(app, "/api/generate", json!({ "prompt": "a forest" })).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert_eq!(body["details"]["error"], "rate limited");

    assert!(store.list_all().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// POST /api/fibo/generate-image
// ---------------------------------------------------------------------------

#[tokio::test]
async fn structured_generate_returns_completed() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(
        Arc::new(scenegen_backend::StubBackend::default()),
        store.clone(),
    );

    let response = post_json(
        app,
        "/api/fibo/generate-image",
        json!({
            "description": "a rainy alley",
            "camera_angle": "top",
            "color_palette": "noir",
            "aspect_ratio": "16:9"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["json"]["camera"]["angle"], "top");
    assert_eq!(body["json"]["color_palette"]["preset"], "noir");
    // Unsupplied field keeps its default.
    assert_eq!(body["json"]["lighting"]["type"], "soft");

    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn structured_generate_rejects_unknown_camera_angle() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/fibo/generate-image",
        json!({ "description": "a rainy alley", "camera_angle": "sideways" }),
    )
    .await;
    common::assert_validation_error(response).await;
}

#[tokio::test]
async fn structured_generate_rejects_empty_description() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/fibo/generate-image", json!({})).await;
    common::assert_validation_error(response).await;
}
