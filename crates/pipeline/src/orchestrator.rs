//! The generation orchestrator.

use std::sync::Arc;

use scenegen_backend::{GenerationBackend, ImageRequest};
use scenegen_core::classify::classify_topic;
use scenegen_core::prompt::{assemble_description, DescriptionClauses};
use scenegen_core::scene::{normalize, validate_prompt, Camera, ColorPalette, Lighting, SceneDescriptor};
use scenegen_db::{HistoryStore, NewHistoryEntry};

use crate::error::PipelineError;

/// Free-text generation request: the descriptor is derived by the
/// normalizer.
#[derive(Debug, Clone)]
pub struct TextGenerationRequest {
    pub prompt: String,
    /// Requested output size, e.g. `1024x1024`.
    pub size: Option<String>,
}

/// Structured generation request: the caller supplies already-resolved
/// fields; normalization is skipped.
#[derive(Debug, Clone, Default)]
pub struct StructuredGenerationRequest {
    pub description: String,
    pub camera_angle: Option<String>,
    pub lighting: Option<String>,
    pub color_palette: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
}

/// Successful generation result.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// URL or data URI of the produced image.
    pub image: String,
    /// Descriptor recorded with this generation.
    pub json: SceneDescriptor,
    /// Always `"completed"` on success.
    pub status: &'static str,
}

/// Per-request pipeline: descriptor -> upstream prompt -> backend ->
/// history append.
///
/// Collaborators are injected once at construction; there is no
/// demo-mode branch inside request handling — demo deployments simply
/// construct the orchestrator with a stub backend.
pub struct Orchestrator {
    backend: Arc<dyn GenerationBackend>,
    store: Arc<dyn HistoryStore>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>, store: Arc<dyn HistoryStore>) -> Self {
        Self { backend, store }
    }

    /// Generate from free text.
    ///
    /// Runs the normalizer, assembles the upstream prompt (clauses only
    /// for non-default fields), and classifies the prompt topic as a pool
    /// hint for the stub backend.
    pub async fn generate_from_text(
        &self,
        request: TextGenerationRequest,
    ) -> Result<GenerationOutcome, PipelineError> {
        validate_prompt(&request.prompt)?;

        let descriptor = normalize(&request.prompt);
        let upstream_prompt = assemble_description(&descriptor.scene, &descriptor.clauses());
        let topic = classify_topic(&request.prompt);

        let image = self
            .backend
            .generate_image(ImageRequest {
                prompt: &upstream_prompt,
                size: request.size.as_deref(),
                aspect_ratio: None,
                topic: Some(topic),
            })
            .await?;

        self.record(&request.prompt, descriptor.clone(), &image.image_url)
            .await;

        Ok(GenerationOutcome {
            image: image.image_url,
            json: descriptor,
            status: "completed",
        })
    }

    /// Generate from caller-resolved fields.
    ///
    /// The same prompt-assembly rule applies, but a clause is emitted for
    /// exactly the fields the caller supplied, and no topic hint is
    /// attached (the stub falls back to its flat demo pool).
    pub async fn generate_structured(
        &self,
        request: StructuredGenerationRequest,
    ) -> Result<GenerationOutcome, PipelineError> {
        validate_prompt(&request.description)?;

        let descriptor = Self::descriptor_from_overrides(&request)?;
        let clauses = DescriptionClauses {
            camera_angle: request.camera_angle.as_deref(),
            lighting: request.lighting.as_deref(),
            color_palette: request.color_palette.as_deref(),
        };
        let upstream_prompt = assemble_description(&request.description, &clauses);

        let image = self
            .backend
            .generate_image(ImageRequest {
                prompt: &upstream_prompt,
                size: request.resolution.as_deref(),
                aspect_ratio: request.aspect_ratio.as_deref(),
                topic: None,
            })
            .await?;

        self.record(&request.description, descriptor.clone(), &image.image_url)
            .await;

        Ok(GenerationOutcome {
            image: image.image_url,
            json: descriptor,
            status: "completed",
        })
    }

    /// Build the recorded descriptor from caller-supplied overrides,
    /// defaulting any absent field.
    fn descriptor_from_overrides(
        request: &StructuredGenerationRequest,
    ) -> Result<SceneDescriptor, PipelineError> {
        let angle = request
            .camera_angle
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        let kind = request
            .lighting
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        let preset = request
            .color_palette
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(SceneDescriptor {
            scene: request.description.clone(),
            camera: Camera { angle },
            lighting: Lighting { kind },
            color_palette: ColorPalette { preset },
        })
    }

    /// Append to the ledger, swallowing failures.
    ///
    /// Generation success is never masked by a persistence failure; a
    /// failed append is logged at warn level and the response to the
    /// caller is unchanged.
    async fn record(&self, prompt: &str, json: SceneDescriptor, image_url: &str) {
        let new = NewHistoryEntry {
            prompt: prompt.to_string(),
            json,
            image_url: image_url.to_string(),
        };
        match self.store.append(new).await {
            Ok(entry) => tracing::info!(id = entry.id, "Recorded generation in history"),
            Err(e) => {
                tracing::warn!(error = %e, "History append failed after successful generation")
            }
        }
    }
}
