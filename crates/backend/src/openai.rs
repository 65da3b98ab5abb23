//! Client for the OpenAI Images API.
//!
//! Requests a base64 payload and returns it as a `data:image/png` URI so
//! the browser can render it without a second fetch.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{BackendError, GeneratedImage, GenerationBackend, ImageRequest};

/// Images endpoint.
const OPENAI_IMAGES_URL: &str = "https://api.openai.com/v1/images/generations";

/// Size sent when the caller does not specify one.
const DEFAULT_SIZE: &str = "1024x1024";

/// HTTP client for OpenAI image generation.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

/// Response body of the images endpoint.
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    b64_json: Option<String>,
}

impl OpenAiBackend {
    /// Create a new client using the given API key and model name.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            url: OPENAI_IMAGES_URL.to_string(),
        }
    }

    /// Override the endpoint URL (used to point tests at a local server).
    pub fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }
}

#[async_trait]
impl GenerationBackend for OpenAiBackend {
    async fn generate_image(
        &self,
        request: ImageRequest<'_>,
    ) -> Result<GeneratedImage, BackendError> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": request.prompt,
            "size": request.size.unwrap_or(DEFAULT_SIZE),
            "response_format": "b64_json",
        });

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
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

        let body: ImagesResponse = response.json().await?;
        let b64 = body
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .ok_or(BackendError::MissingImage)?;

        Ok(GeneratedImage {
            image_url: format!("data:image/png;base64,{b64}"),
        })
    }
}
