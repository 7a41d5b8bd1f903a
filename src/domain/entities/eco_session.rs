//! Per-visitor session record

use chrono::{DateTime, Utc};

use super::{ChallengeBoard, EnvironmentalData, Ngo, SpeciesEntry};
use crate::domain::value_objects::{Interests, MediaAsset, SessionId, WeatherSnapshot};

/// Everything a visitor has generated so far
///
/// Fields are overwritten by the next action that produces them and live only
/// as long as the process.
#[derive(Debug, Clone)]
pub struct EcoSession {
    pub id: SessionId,
    pub city: Option<String>,
    pub interests: Interests,
    pub weather: Option<WeatherSnapshot>,
    pub story: Option<String>,
    pub music: Option<MediaAsset>,
    pub image: Option<MediaAsset>,
    pub environmental_data: Option<EnvironmentalData>,
    pub challenges: ChallengeBoard,
    pub species: Vec<SpeciesEntry>,
    pub ngos: Vec<Ngo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EcoSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            city: None,
            interests: Interests::default(),
            weather: None,
            story: None,
            music: None,
            image: None,
            environmental_data: None,
            challenges: ChallengeBoard::default(),
            species: Vec::new(),
            ngos: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the challenge board; completion flags and the species panel start over
    pub fn replace_challenges(&mut self, board: ChallengeBoard) {
        self.challenges = board;
        self.species.clear();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EcoSession {
    fn default() -> Self {
        Self::new()
    }
}
