//! OpenWeather client for current conditions

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{UpstreamError, WeatherPort};
use crate::domain::value_objects::WeatherSnapshot;

pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// `GET /data/2.5/weather?q={city}&units=metric`
    #[instrument(skip(self))]
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeatherResponse, OpenWeatherError> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(OpenWeatherError::ApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body: CurrentWeatherResponse = response.json().await?;
        debug!(?body, "Weather received");
        Ok(body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenWeatherError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} {body}")]
    ApiError { status: u16, body: String },
}

impl From<OpenWeatherError> for UpstreamError {
    fn from(e: OpenWeatherError) -> Self {
        match e {
            OpenWeatherError::HttpError(e) if e.is_decode() => {
                UpstreamError::InvalidResponse(e.to_string())
            }
            OpenWeatherError::HttpError(e) => UpstreamError::Transport(e.to_string()),
            OpenWeatherError::ApiError { status, body } => UpstreamError::Unavailable { status, body },
        }
    }
}

/// The subset of the current-weather payload that is read. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub main: Option<String>,
}

impl From<CurrentWeatherResponse> for WeatherSnapshot {
    fn from(response: CurrentWeatherResponse) -> Self {
        let main = response.main.unwrap_or_default();
        Self {
            temperature: main.temp,
            humidity: main.humidity,
            condition: response.weather.into_iter().next().and_then(|w| w.main),
        }
    }
}

// =============================================================================
// WeatherPort Implementation
// =============================================================================

#[async_trait]
impl WeatherPort for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, UpstreamError> {
        let response = self.fetch_current(city).await?;
        Ok(response.into())
    }
}
