//! Handlers for the generation history ledger.
//!
//! Routes:
//! - `POST /api/history/add` — append an entry
//! - `GET  /api/history`     — full list, oldest first

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use scenegen_db::{HistoryEntry, NewHistoryEntry};

use crate::error::AppResult;
use crate::response::Success;
use crate::state::AppState;

/// Success payload of `POST /api/history/add`.
#[derive(Debug, Serialize)]
pub struct AddHistoryPayload {
    /// The appended entry with its assigned id and timestamp.
    pub entry: HistoryEntry,
}

/// Success payload of `GET /api/history`.
#[derive(Debug, Serialize)]
pub struct ListHistoryPayload {
    pub history: Vec<HistoryEntry>,
}

/// POST /api/history/add
///
/// Appends an entry supplied directly by the client (the UI records
/// generations it performed itself through this endpoint).
pub async fn add_history(
    State(state): State<AppState>,
    Json(input): Json<NewHistoryEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = state.store.append(input).await?;
    tracing::info!(id = entry.id, "Added history entry");
    Ok(Json(Success::new(AddHistoryPayload { entry })))
}

/// GET /api/history
pub async fn list_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let history = state.store.list_all().await?;
    Ok(Json(Success::new(ListHistoryPayload { history })))
}
