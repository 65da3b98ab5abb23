/// Domain-level error type shared across the workspace.
///
/// Kept deliberately small: the HTTP layer maps each variant onto a
/// status code and response body in `scenegen-api`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Invalid caller-supplied input (maps to 400).
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure (maps to 500).
    #[error("Internal error: {0}")]
    Internal(String),
}
