//! Application configuration

use std::env;

use anyhow::{Context, Result};
use chrono::Duration;

pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
pub const DEFAULT_MUSICGEN_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/musicgen-small";
pub const DEFAULT_IMAGEGEN_API_URL: &str =
    "https://api-inference.huggingface.co/models/Artples/LAI-ImageGeneration-vSDXL-2";

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// OpenAI-compatible API base URL
    pub openai_base_url: String,
    /// OpenAI API key
    pub openai_api_key: String,
    /// Chat model used for every language-model request
    pub openai_model: String,

    /// OpenWeather API base URL
    pub openweather_base_url: String,
    /// OpenWeather API key
    pub openweather_api_key: String,

    /// Hugging Face inference endpoint for music
    pub musicgen_api_url: String,
    /// Hugging Face inference endpoint for images
    pub imagegen_api_url: String,
    /// Hugging Face API token
    pub huggingface_api_key: String,

    /// HTTP server port
    pub server_port: u16,
    /// Sessions untouched for this long are evicted
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY environment variable is required")?,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),

            openweather_base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".to_string()),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .context("OPENWEATHER_API_KEY environment variable is required")?,

            musicgen_api_url: env::var("MUSICGEN_API_URL")
                .unwrap_or_else(|_| DEFAULT_MUSICGEN_API_URL.to_string()),
            imagegen_api_url: env::var("IMAGEGEN_API_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGEGEN_API_URL.to_string()),
            huggingface_api_key: env::var("HUGGINGFACE_API_KEY")
                .context("HUGGINGFACE_API_KEY environment variable is required")?,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            session_ttl: env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_MINUTES.to_string())
                .parse()
                .ok()
                .filter(|minutes: &i64| *minutes > 0)
                .and_then(Duration::try_minutes)
                .context("SESSION_TTL_MINUTES must be a positive number of minutes")?,
        })
    }
}

// Keys stay out of logs
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_api_key", &"<redacted>")
            .field("openai_model", &self.openai_model)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("openweather_api_key", &"<redacted>")
            .field("musicgen_api_url", &self.musicgen_api_url)
            .field("imagegen_api_url", &self.imagegen_api_url)
            .field("huggingface_api_key", &"<redacted>")
            .field("server_port", &self.server_port)
            .field("session_ttl_minutes", &self.session_ttl.num_minutes())
            .finish()
    }
}
