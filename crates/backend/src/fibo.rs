//! REST client for the hosted FIBO text-to-image API.

use async_trait::async_trait;
use serde_json::Value;

use crate::{BackendError, GeneratedImage, GenerationBackend, ImageRequest};

/// Aspect ratio sent when the caller does not specify one.
const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// HTTP client for the FIBO generation endpoint.
///
/// Authenticates with an `api_token` header and submits
/// `{ "prompt", "aspect_ratio" }` payloads.
pub struct FiboBackend {
    client: reqwest::Client,
    url: String,
    api_token: String,
}

impl FiboBackend {
    /// Create a new client for the endpoint at `url`.
    pub fn new(url: String, api_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across backends).
    pub fn with_client(client: reqwest::Client, url: String, api_token: String) -> Self {
        Self {
            client,
            url,
            api_token,
        }
    }

    /// Pull the image URL out of a FIBO response payload.
    ///
    /// The payload nests the result under `data` in some deployments and
    /// at the top level in others; both `image_url` and `output_url` are
    /// accepted.
    fn extract_image_url(payload: &Value) -> Option<String> {
        let candidates = [&payload["data"], payload];
        for obj in candidates {
            for key in ["image_url", "output_url"] {
                if let Some(url) = obj[key].as_str() {
                    return Some(url.to_string());
                }
            }
        }
        None
    }
}

#[async_trait]
impl GenerationBackend for FiboBackend {
    async fn generate_image(
        &self,
        request: ImageRequest<'_>,
    ) -> Result<GeneratedImage, BackendError> {
        let payload = serde_json::json!({
            "prompt": request.prompt,
            "aspect_ratio": request.aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO),
        });

        let response = self
            .client
            .post(&self.url)
            .header("api_token", &self.api_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        let image_url = Self::extract_image_url(&body).ok_or(BackendError::MissingImage)?;

        tracing::debug!(image_url = %image_url, "FIBO generation completed");
        Ok(GeneratedImage { image_url })
    }
}
