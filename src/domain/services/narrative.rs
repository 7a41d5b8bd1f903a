//! Narrative and media-description templates

use crate::domain::value_objects::{Mood, WeatherSnapshot, DATA_NOT_AVAILABLE};

/// One-sentence summary of a city's weather
///
/// `In London, the weather is Clouds with a temperature of 18°C.`
pub fn build_narrative(city: &str, weather: &WeatherSnapshot) -> String {
    let temperature = match weather.temperature {
        Some(t) => format!("{}°C", t),
        None => DATA_NOT_AVAILABLE.to_string(),
    };
    format!(
        "In {}, the weather is {} with a temperature of {}.",
        city,
        weather.condition_display(),
        temperature
    )
}

/// Temperature feel used by the music prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// Below 10°C
    Cold,
    /// 10°C to 20°C inclusive
    Cool,
    /// Above 20°C up to 30°C inclusive
    Warm,
    /// Above 30°C
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(t: f64) -> Self {
        if t < 10.0 {
            Self::Cold
        } else if t <= 20.0 {
            Self::Cool
        } else if t <= 30.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Cold => "a cold ambiance",
            Self::Cool => "a cool feel",
            Self::Warm => "a warm, lively environment",
            Self::Hot => "a hot, energetic vibe",
        }
    }
}

/// Prompt for the music generator
///
/// `cloudy mood with clouds weather and a cool feel`. The temperature clause is
/// left out when the temperature is unknown.
pub fn build_media_description(mood: Mood, weather: &WeatherSnapshot) -> String {
    let mut description = format!(
        "{} mood with {} weather",
        mood,
        weather.condition_display().to_lowercase()
    );
    if let Some(t) = weather.temperature {
        description.push_str(" and ");
        description.push_str(TemperatureBand::from_celsius(t).phrase());
    }
    description
}
