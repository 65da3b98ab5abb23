//! Handlers for image generation.
//!
//! Routes:
//! - `POST /api/generate`            — free-text generation
//! - `POST /api/fibo/generate-image` — structured generation

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use scenegen_core::scene::SceneDescriptor;
use scenegen_pipeline::{StructuredGenerationRequest, TextGenerationRequest};

use crate::error::AppResult;
use crate::response::Success;
use crate::state::AppState;

/// Body of `POST /api/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-text prompt. A missing or empty prompt is a validation error.
    #[serde(default)]
    pub prompt: String,
    /// Requested output size, e.g. `1024x1024`.
    pub size: Option<String>,
}

/// Body of `POST /api/fibo/generate-image`.
#[derive(Debug, Deserialize)]
pub struct StructuredGenerateRequest {
    #[serde(default)]
    pub description: String,
    pub camera_angle: Option<String>,
    pub lighting: Option<String>,
    pub color_palette: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
}

/// Success payload for both generation endpoints.
#[derive(Debug, Serialize)]
pub struct GeneratePayload {
    /// URL or data URI of the produced image.
    pub image: String,
    /// Descriptor recorded with this generation.
    pub json: SceneDescriptor,
    /// Always `"completed"`.
    pub status: &'static str,
}

/// POST /api/generate
///
/// Normalizes the prompt, invokes the generation backend, and records the
/// result in history. A failed history append does not fail the request.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = state
        .orchestrator
        .generate_from_text(TextGenerationRequest {
            prompt: input.prompt,
            size: input.size,
        })
        .await?;

    Ok(Json(Success::new(GeneratePayload {
        image: outcome.image,
        json: outcome.json,
        status: outcome.status,
    })))
}

/// POST /api/fibo/generate-image
///
/// Caller supplies already-resolved scene fields; normalization is
/// skipped but the same prompt-assembly and history rules apply.
pub async fn generate_structured(
    State(state): State<AppState>,
    Json(input): Json<StructuredGenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = state
        .orchestrator
        .generate_structured(StructuredGenerationRequest {
            description: input.description,
            camera_angle: input.camera_angle,
            lighting: input.lighting,
            color_palette: input.color_palette,
            resolution: input.resolution,
            aspect_ratio: input.aspect_ratio,
        })
        .await?;

    Ok(Json(Success::new(GeneratePayload {
        image: outcome.image,
        json: outcome.json,
        status: outcome.status,
    })))
}
