//! Demo backend returning pre-set images instead of calling a real API.

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use scenegen_core::classify::PromptTopic;

use crate::{BackendError, GeneratedImage, GenerationBackend, ImageRequest};

/// Fixed candidate pools for the demo backend.
///
/// One pool per [`PromptTopic`], plus a flat `demo` pool used when the
/// request carries no topic hint (the structured entry point).
#[derive(Debug, Clone)]
pub struct ImagePools {
    pub nature: Vec<String>,
    pub city: Vec<String>,
    pub people: Vec<String>,
    pub product: Vec<String>,
    pub art: Vec<String>,
    pub demo: Vec<String>,
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ImagePools {
    fn default() -> Self {
        Self {
            nature: urls(&[
                "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1200&h=800&fit=crop",
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1024&h=1024&fit=crop",
            ]),
            city: urls(&[
                "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1432836431433-925d3cc0a5cd?w=1024&h=1024&fit=crop",
            ]),
            people: urls(&[
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=1024&h=1024&fit=crop",
            ]),
            product: urls(&[
                "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?w=1024&h=1024&fit=crop",
            ]),
            art: urls(&[
                "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1495567720989-cebdbdd97913?w=1024&h=1024&fit=crop",
            ]),
            demo: urls(&[
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1024&h=1024&fit=crop",
                "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?w=1024&h=1024&fit=crop",
            ]),
        }
    }
}

impl ImagePools {
    fn for_topic(&self, topic: PromptTopic) -> &[String] {
        match topic {
            PromptTopic::Nature => &self.nature,
            PromptTopic::City => &self.city,
            PromptTopic::People => &self.people,
            PromptTopic::Product => &self.product,
            PromptTopic::Art => &self.art,
        }
    }
}

/// Demo-mode backend: a uniform random pick from a fixed pool.
///
/// With a topic hint the pick is restricted to that topic's pool;
/// without one the flat demo pool is used.
#[derive(Debug, Clone, Default)]
pub struct StubBackend {
    pools: ImagePools,
}

impl StubBackend {
    pub fn new(pools: ImagePools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl GenerationBackend for StubBackend {
    async fn generate_image(
        &self,
        request: ImageRequest<'_>,
    ) -> Result<GeneratedImage, BackendError> {
        let pool = match request.topic {
            Some(topic) => self.pools.for_topic(topic),
            None => &self.pools.demo,
        };

        let image_url = pool
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(BackendError::MissingImage)?;

        tracing::debug!(
            topic = request.topic.map(|t| t.as_str()).unwrap_or("none"),
            image_url = %image_url,
            "Stub generation completed"
        );

        Ok(GeneratedImage { image_url })
    }
}
