pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate                 POST  free-text generation
/// /prompt/convert           POST  prompt -> scene descriptor
/// /history                  GET   full history list
/// /history/add              POST  append a history entry
/// /fibo/generate-image      POST  structured generation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(handlers::generate::generate))
        .route("/prompt/convert", post(handlers::prompt::convert))
        .route("/history", get(handlers::history::list_history))
        .route("/history/add", post(handlers::history::add_history))
        .route(
            "/fibo/generate-image",
            post(handlers::generate::generate_structured),
        )
}
