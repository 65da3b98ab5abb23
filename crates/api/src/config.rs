use std::path::PathBuf;

/// Which real generation backend to use when demo mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Hosted FIBO text-to-image API.
    Fibo,
    /// OpenAI Images API.
    OpenAi,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// When true, generation uses the stub backend and fixed demo pools.
    pub demo_mode: bool,
    /// Real backend selection (`GENERATION_BACKEND`, ignored in demo mode).
    pub generation_backend: BackendKind,
    /// FIBO endpoint URL (`FIBO_URL`, required for the fibo backend).
    pub fibo_url: Option<String>,
    /// FIBO API token (`FIBO_API_KEY`, required for the fibo backend).
    pub fibo_api_key: Option<String>,
    /// OpenAI API key (`OPENAI_API_KEY`, required for the openai backend).
    pub openai_api_key: Option<String>,
    /// OpenAI image model name (default: `gpt-image-1`).
    pub openai_image_model: String,
    /// Path to the JSON history file. Unset means in-memory history only.
    pub history_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DEMO_MODE`            | `false`                    |
    /// | `GENERATION_BACKEND`   | `openai`                   |
    /// | `FIBO_URL`             | unset                      |
    /// | `FIBO_API_KEY`         | unset                      |
    /// | `OPENAI_API_KEY`       | unset                      |
    /// | `OPENAI_IMAGE_MODEL`   | `gpt-image-1`              |
    /// | `HISTORY_FILE`         | unset (in-memory history)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let demo_mode = std::env::var("DEMO_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let generation_backend = match std::env::var("GENERATION_BACKEND")
            .unwrap_or_else(|_| "openai".into())
            .as_str()
        {
            "fibo" => BackendKind::Fibo,
            "openai" => BackendKind::OpenAi,
            other => panic!("GENERATION_BACKEND must be 'fibo' or 'openai', got '{other}'"),
        };

        let openai_image_model =
            std::env::var("OPENAI_IMAGE_MODEL").unwrap_or_else(|_| "gpt-image-1".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            demo_mode,
            generation_backend,
            fibo_url: std::env::var("FIBO_URL").ok(),
            fibo_api_key: std::env::var("FIBO_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_image_model,
            history_file: std::env::var("HISTORY_FILE").ok().map(PathBuf::from),
        }
    }
}
