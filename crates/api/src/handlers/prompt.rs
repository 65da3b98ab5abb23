//! Handler for prompt-to-descriptor conversion.
//!
//! Route: `POST /api/prompt/convert`.

use axum::Json;
use serde::{Deserialize, Serialize};

use scenegen_core::scene::{normalize, SceneDescriptor};

use crate::response::Success;

/// Body of `POST /api/prompt/convert`.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Free text. Normalization is total, so an empty prompt simply
    /// yields the all-defaults descriptor.
    #[serde(default)]
    pub prompt: String,
}

/// Success payload: the normalized descriptor.
#[derive(Debug, Serialize)]
pub struct ConvertPayload {
    pub json: SceneDescriptor,
}

/// POST /api/prompt/convert
pub async fn convert(Json(input): Json<ConvertRequest>) -> Json<Success<ConvertPayload>> {
    Json(Success::new(ConvertPayload {
        json: normalize(&input.prompt),
    }))
}
