#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use scenegen_api::config::{BackendKind, ServerConfig};
use scenegen_api::router::build_app_router;
use scenegen_api::state::AppState;
use scenegen_backend::{GenerationBackend, StubBackend};
use scenegen_db::{HistoryStore, MemoryStore};
use scenegen_pipeline::Orchestrator;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        demo_mode: true,
        generation_backend: BackendKind::OpenAi,
        fibo_url: None,
        fibo_api_key: None,
        openai_api_key: None,
        openai_image_model: "gpt-image-1".to_string(),
        history_file: None,
    }
}

/// Build the full application router with all middleware layers, a stub
/// generation backend, and a fresh in-memory history store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(StubBackend::default()), Arc::new(MemoryStore::new()))
}

/// Like [`build_test_app`] but with injectable collaborators, so tests can
/// substitute a failing backend or a pre-seeded store.
pub fn build_test_app_with(
    backend: Arc<dyn GenerationBackend>,
    store: Arc<dyn HistoryStore>,
) -> Router {
    let config = test_config();
    let orchestrator = Arc::new(Orchestrator::new(backend, Arc::clone(&store)));

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        orchestrator,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 400 validation error with the standard error envelope.
pub async fn assert_validation_error(response: Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}
