//! Current weather for a city

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a weather field was missing from the upstream response
pub const DATA_NOT_AVAILABLE: &str = "Data not available";

/// Weather reading as returned by the weather service
///
/// Every field is optional: the upstream payload is read defensively and a
/// missing field stays `None` instead of being replaced by a sentinel value.
/// Callers must check presence before comparing numerically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Short condition label, e.g. "Clouds", "Rain", "Clear"
    pub condition: Option<String>,
}

impl WeatherSnapshot {
    #[cfg(test)]
    pub fn new(temperature: f64, humidity: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            condition: Some(condition.into()),
        }
    }

    /// Condition text, or the placeholder when absent
    pub fn condition_display(&self) -> &str {
        self.condition.as_deref().unwrap_or(DATA_NOT_AVAILABLE)
    }

    pub fn temperature_display(&self) -> String {
        display_number(self.temperature)
    }

    pub fn humidity_display(&self) -> String {
        display_number(self.humidity)
    }
}

fn display_number(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| DATA_NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_numbers_without_fraction() {
        let weather = WeatherSnapshot::new(18.0, 70.0, "Clouds");
        assert_eq!(weather.temperature_display(), "18");
        assert_eq!(weather.humidity_display(), "70");
        assert_eq!(weather.condition_display(), "Clouds");
    }

    #[test]
    fn test_missing_fields_display_placeholder() {
        let weather = WeatherSnapshot::default();
        assert_eq!(weather.temperature_display(), DATA_NOT_AVAILABLE);
        assert_eq!(weather.humidity_display(), DATA_NOT_AVAILABLE);
        assert_eq!(weather.condition_display(), DATA_NOT_AVAILABLE);
    }
}
