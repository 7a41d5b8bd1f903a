//! Weather port - Current conditions for a city

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::value_objects::WeatherSnapshot;

#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current weather in metric units. `city` is passed through unvalidated.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, UpstreamError>;
}
