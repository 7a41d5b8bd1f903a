//! Hugging Face inference client for music and image generation

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{MediaGenerationPort, UpstreamError};
use crate::domain::value_objects::MediaAsset;

/// Client for the Hugging Face inference API
pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    musicgen_url: String,
    imagegen_url: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: &str, musicgen_url: &str, imagegen_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            musicgen_url: musicgen_url.to_string(),
            imagegen_url: imagegen_url.to_string(),
        }
    }

    /// POST `{"inputs": text}` to a model endpoint and return the raw body
    #[instrument(skip(self, inputs), fields(inputs_len = inputs.len()))]
    pub async fn run_inference(&self, url: &str, inputs: &str) -> Result<Vec<u8>, HuggingFaceError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(HuggingFaceError::ApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let bytes = response.bytes().await?;
        debug!(len = bytes.len(), "Inference payload received");
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HuggingFaceError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} {body}")]
    ApiError { status: u16, body: String },
}

impl From<HuggingFaceError> for UpstreamError {
    fn from(e: HuggingFaceError) -> Self {
        match e {
            HuggingFaceError::HttpError(e) => UpstreamError::Transport(e.to_string()),
            HuggingFaceError::ApiError { status, body } => UpstreamError::Unavailable { status, body },
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

// =============================================================================
// MediaGenerationPort Implementation
// =============================================================================

#[async_trait]
impl MediaGenerationPort for HuggingFaceClient {
    async fn generate_music(&self, description: &str) -> Result<MediaAsset, UpstreamError> {
        let bytes = self.run_inference(&self.musicgen_url, description).await?;
        Ok(MediaAsset::new(bytes))
    }

    async fn generate_image(&self, description: &str) -> Result<MediaAsset, UpstreamError> {
        let bytes = self.run_inference(&self.imagegen_url, description).await?;
        Ok(MediaAsset::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(InferenceRequest { inputs: "calm rain" }).unwrap();
        assert_eq!(body, serde_json::json!({ "inputs": "calm rain" }));
    }

    #[test]
    fn test_api_error_maps_to_unavailable() {
        let err: UpstreamError = HuggingFaceError::ApiError {
            status: 503,
            body: "Model is loading".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "503 Model is loading");
    }
}
