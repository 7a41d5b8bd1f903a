//! Mood classification derived from the weather

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;

/// Closed set of moods a city's weather can evoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Rainy,
    Sunny,
    Cloudy,
    Cool,
    Neutral,
}

impl Mood {
    /// Classify a weather reading. Rules are checked in order and the first match wins:
    ///
    /// 1. condition contains "rain" -> rainy
    /// 2. condition contains "clear" and temperature > 25 -> sunny
    /// 3. condition contains "cloud" -> cloudy
    /// 4. temperature < 15 -> cool
    /// 5. otherwise neutral
    ///
    /// Substring matches ignore case. Temperature rules never fire when the
    /// temperature is missing.
    pub fn classify(weather: &WeatherSnapshot) -> Self {
        let condition = weather
            .condition
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let temperature = weather.temperature;

        if condition.contains("rain") {
            Self::Rainy
        } else if condition.contains("clear") && temperature.is_some_and(|t| t > 25.0) {
            Self::Sunny
        } else if condition.contains("cloud") {
            Self::Cloudy
        } else if temperature.is_some_and(|t| t < 15.0) {
            Self::Cool
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rainy => "rainy",
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
