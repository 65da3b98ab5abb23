//! Image-generation capability.
//!
//! [`GenerationBackend`] is the seam between the orchestrator and whatever
//! actually produces images: the hosted FIBO API ([`FiboBackend`]), the
//! OpenAI Images API ([`OpenAiBackend`]), or fixed demo pools
//! ([`StubBackend`]). The backend is chosen once at startup; nothing in
//! request handling branches on a demo flag.

pub mod fibo;
pub mod openai;
pub mod stub;

use async_trait::async_trait;

use scenegen_core::classify::PromptTopic;

pub use fibo::FiboBackend;
pub use openai::OpenAiBackend;
pub use stub::{ImagePools, StubBackend};

/// A generation request as seen by a backend.
#[derive(Debug, Clone, Copy)]
pub struct ImageRequest<'a> {
    /// Fully assembled upstream prompt.
    pub prompt: &'a str,
    /// Requested output size, e.g. `1024x1024`.
    pub size: Option<&'a str>,
    /// Requested aspect ratio, e.g. `1:1`.
    pub aspect_ratio: Option<&'a str>,
    /// Topic hint for pool selection. Only the stub backend uses it; when
    /// absent the stub falls back to its flat demo pool.
    pub topic: Option<PromptTopic>,
}

/// Successful backend output.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// URL or data URI of the produced image.
    pub image_url: String,
}

/// Errors from the generation capability.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream API returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The upstream response contained no usable image payload.
    #[error("Upstream returned no usable image payload")]
    MissingImage,
}

impl BackendError {
    /// Upstream payload to attach to error responses, if any.
    ///
    /// Non-2xx bodies are returned parsed as JSON when possible, raw
    /// otherwise.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            BackendError::Api { body, .. } => Some(
                serde_json::from_str(body)
                    .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
            ),
            BackendError::Request(e) => Some(serde_json::Value::String(e.to_string())),
            BackendError::MissingImage => None,
        }
    }
}

/// An opaque capability producing one image per request.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate_image(&self, request: ImageRequest<'_>)
        -> Result<GeneratedImage, BackendError>;
}
