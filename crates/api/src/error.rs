use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scenegen_core::error::CoreError;
use scenegen_db::StoreError;
use scenegen_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error types and implements [`IntoResponse`] to
/// produce the service's `{ "success": false, "message", "details"? }`
/// error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scenegen-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A pipeline error (validation or upstream failure).
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A history store error from a direct ledger endpoint.
    #[error("History store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Core(CoreError::Validation(msg))
            | AppError::Pipeline(PipelineError::Core(CoreError::Validation(msg))) => {
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::Core(CoreError::Internal(msg))
            | AppError::Pipeline(PipelineError::Core(CoreError::Internal(msg))) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            AppError::Pipeline(PipelineError::Upstream { message, details }) => {
                tracing::error!(error = %message, "Upstream generation failure");
                (StatusCode::BAD_GATEWAY, message, details)
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "History store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access history".to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
