//! Hand-written port doubles shared by service and route tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{LlmPort, LlmRequest, LlmResponse, MediaGenerationPort, UpstreamError, WeatherPort};
use crate::domain::value_objects::{MediaAsset, WeatherSnapshot};

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";
pub const WAV_BYTES: &[u8] = b"RIFF\0\0\0\0WAVEfake";

pub fn unavailable(status: u16) -> UpstreamError {
    UpstreamError::Unavailable {
        status,
        body: "upstream down".to_string(),
    }
}

pub struct MockWeather {
    pub result: Result<WeatherSnapshot, UpstreamError>,
}

impl MockWeather {
    pub fn ok(weather: WeatherSnapshot) -> Self {
        Self { result: Ok(weather) }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(unavailable(status)),
        }
    }
}

#[async_trait]
impl WeatherPort for MockWeather {
    async fn current_weather(&self, _city: &str) -> Result<WeatherSnapshot, UpstreamError> {
        self.result.clone()
    }
}

/// Answers each kind of prompt with a canned reply
pub struct ScriptedLlm {
    pub story: Result<String, UpstreamError>,
    pub challenges: String,
    pub species: String,
    pub ngos: String,
    pub environmental_data: String,
    /// Held before answering an NGO prompt
    pub ngo_delay: Duration,
    pub calls: AtomicUsize,
}

impl Default for ScriptedLlm {
    fn default() -> Self {
        Self {
            story: Ok("Grey clouds drift over the Thames while the city breathes slowly.".to_string()),
            challenges: "Take a shorter shower\nBike to work\n\nCarry a reusable bag\nSkip meat for a day".to_string(),
            species: r#"[{"name": "Water Vole", "population": "132,000", "description": "Small riverbank rodent"},
                         {"name": "Hazel Dormouse", "population": "930,000", "description": "Tiny nocturnal climber"}]"#
                .to_string(),
            ngos: r#"[{"name": "Thames21", "location": "London", "focus": "River health"}]"#.to_string(),
            environmental_data: r#"{"AQI": 38, "Water Quality": "Good"}"#.to_string(),
            ngo_delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ScriptedLlm {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmPort for ScriptedLlm {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let content = if request.system_prompt.is_some() {
            self.story.clone()?
        } else if prompt.contains("eco-friendly challenges") {
            self.challenges.clone()
        } else if prompt.contains("endangered species") {
            self.species.clone()
        } else if prompt.contains("NGOs") {
            tokio::time::sleep(self.ngo_delay).await;
            self.ngos.clone()
        } else if prompt.contains("simulated environmental data") {
            self.environmental_data.clone()
        } else {
            return Err(UpstreamError::InvalidResponse(format!("unexpected prompt: {}", prompt)));
        };

        Ok(LlmResponse {
            content,
            model: "mock".to_string(),
            tokens_used: 0,
        })
    }
}

pub struct MockMedia {
    pub music: Result<Vec<u8>, UpstreamError>,
    pub image: Result<Vec<u8>, UpstreamError>,
    pub image_prompts: std::sync::Mutex<Vec<String>>,
}

impl Default for MockMedia {
    fn default() -> Self {
        Self {
            music: Ok(WAV_BYTES.to_vec()),
            image: Ok(PNG_BYTES.to_vec()),
            image_prompts: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl MockMedia {
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MediaGenerationPort for MockMedia {
    async fn generate_music(&self, _description: &str) -> Result<MediaAsset, UpstreamError> {
        self.music.clone().map(MediaAsset::new)
    }

    async fn generate_image(&self, description: &str) -> Result<MediaAsset, UpstreamError> {
        if let Ok(mut prompts) = self.image_prompts.lock() {
            prompts.push(description.to_string());
        }
        self.image.clone().map(MediaAsset::new)
    }
}
