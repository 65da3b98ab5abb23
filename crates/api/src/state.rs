use std::sync::Arc;

use scenegen_db::HistoryStore;
use scenegen_pipeline::Orchestrator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// History ledger, shared with the orchestrator.
    pub store: Arc<dyn HistoryStore>,
    /// Generation pipeline.
    pub orchestrator: Arc<Orchestrator>,
}
