use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scenegen_api::config::{BackendKind, ServerConfig};
use scenegen_api::router::build_app_router;
use scenegen_api::state::AppState;
use scenegen_backend::{FiboBackend, GenerationBackend, OpenAiBackend, StubBackend};
use scenegen_db::{HistoryStore, JsonFileStore, MemoryStore};
use scenegen_pipeline::Orchestrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scenegen_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- History store ---
    let store: Arc<dyn HistoryStore> = match &config.history_file {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .await
                .expect("Failed to open history file");
            tracing::info!(path = %path.display(), "Using file-backed history store");
            Arc::new(store)
        }
        None => {
            tracing::info!("Using in-memory history store");
            Arc::new(MemoryStore::new())
        }
    };

    // --- Generation backend ---
    let backend: Arc<dyn GenerationBackend> = if config.demo_mode {
        tracing::info!("Demo mode enabled, using stub generation backend");
        Arc::new(StubBackend::default())
    } else {
        match config.generation_backend {
            BackendKind::Fibo => {
                let url = config.fibo_url.clone().expect("FIBO_URL must be set");
                let token = config
                    .fibo_api_key
                    .clone()
                    .expect("FIBO_API_KEY must be set");
                tracing::info!(url = %url, "Using FIBO generation backend");
                Arc::new(FiboBackend::new(url, token))
            }
            BackendKind::OpenAi => {
                let key = config
                    .openai_api_key
                    .clone()
                    .expect("OPENAI_API_KEY must be set");
                tracing::info!(model = %config.openai_image_model, "Using OpenAI generation backend");
                Arc::new(OpenAiBackend::new(key, config.openai_image_model.clone()))
            }
        }
    };

    // --- Orchestrator ---
    let orchestrator = Arc::new(Orchestrator::new(backend, Arc::clone(&store)));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        orchestrator,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app).await.expect("Server failed");
}
