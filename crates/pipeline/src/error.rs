use scenegen_backend::BackendError;
use scenegen_core::error::CoreError;

/// Errors returned from the orchestrator.
///
/// Persistence failures are deliberately absent: a ledger append that
/// fails after a successful generation is logged and swallowed, never
/// surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Invalid request input (empty prompt, unknown enum value).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The generation capability failed.
    #[error("Image generation failed: {message}")]
    Upstream {
        message: String,
        /// Upstream error payload, when one was returned.
        details: Option<serde_json::Value>,
    },
}

impl From<BackendError> for PipelineError {
    fn from(e: BackendError) -> Self {
        PipelineError::Upstream {
            details: e.details(),
            message: e.to_string(),
        }
    }
}
