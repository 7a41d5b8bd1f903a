//! Shared application state

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::outbound::{LlmPort, MediaGenerationPort, WeatherPort};
use crate::application::services::SymphonyService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::huggingface::HuggingFaceClient;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::openweather::OpenWeatherClient;
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    /// Active visitor sessions
    pub sessions: RwLock<SessionManager>,
    pub symphony_service: SymphonyService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let weather = Arc::new(OpenWeatherClient::new(
            &config.openweather_base_url,
            &config.openweather_api_key,
        ));
        let llm = Arc::new(OpenAiClient::new(
            &config.openai_base_url,
            &config.openai_api_key,
            &config.openai_model,
        ));
        let media = Arc::new(HuggingFaceClient::new(
            &config.huggingface_api_key,
            &config.musicgen_api_url,
            &config.imagegen_api_url,
        ));

        Self::with_ports(weather, llm, media)
    }

    /// Build the state over any set of port implementations
    pub fn with_ports(
        weather: Arc<dyn WeatherPort>,
        llm: Arc<dyn LlmPort>,
        media: Arc<dyn MediaGenerationPort>,
    ) -> Self {
        Self {
            sessions: RwLock::new(SessionManager::new()),
            symphony_service: SymphonyService::new(weather, llm, media),
        }
    }
}
