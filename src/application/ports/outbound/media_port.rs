//! Media generation port - Text-to-audio and text-to-image services

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::value_objects::MediaAsset;

#[async_trait]
pub trait MediaGenerationPort: Send + Sync {
    /// Generate a music clip from a text description
    async fn generate_music(&self, description: &str) -> Result<MediaAsset, UpstreamError>;

    /// Generate an image from a text description
    async fn generate_image(&self, description: &str) -> Result<MediaAsset, UpstreamError>;
}
