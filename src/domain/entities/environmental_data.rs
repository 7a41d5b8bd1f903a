//! Simulated environmental indicators for a city

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DATA_NOT_AVAILABLE;

/// A single indicator value; the model may answer with a number or a phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// Indicators requested from the model. Unknown keys are rejected; any key may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentalData {
    #[serde(rename = "AQI", default)]
    pub aqi: Option<Reading>,
    #[serde(rename = "Deforestation Rate", default)]
    pub deforestation_rate: Option<Reading>,
    #[serde(rename = "Water Quality", default)]
    pub water_quality: Option<Reading>,
    #[serde(rename = "Biodiversity Impact", default)]
    pub biodiversity_impact: Option<Reading>,
}

impl EnvironmentalData {
    /// Label/value pairs in display order, with the placeholder for missing values
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let show = |r: &Option<Reading>| {
            r.as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| DATA_NOT_AVAILABLE.to_string())
        };
        vec![
            ("AQI", show(&self.aqi)),
            ("Deforestation Rate", show(&self.deforestation_rate)),
            ("Water Quality", show(&self.water_quality)),
            ("Biodiversity Impact", show(&self.biodiversity_impact)),
        ]
    }
}
