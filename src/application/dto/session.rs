//! Session view rendered to the page, plus request bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::Notice;
use crate::domain::entities::{EcoSession, EnvironmentalData, Ngo};
use crate::domain::services::{build_media_description, build_narrative};
use crate::domain::value_objects::{Interests, Mood, WeatherSnapshot};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SymphonyRequestDto {
    pub city: String,
    #[serde(default)]
    pub interests: Interests,
}

#[derive(Debug, Deserialize)]
pub struct ToggleChallengeRequestDto {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct NgoRequestDto {
    #[serde(default)]
    pub interests: Interests,
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WeatherDto {
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
}

impl From<&WeatherSnapshot> for WeatherDto {
    fn from(w: &WeatherSnapshot) -> Self {
        Self {
            temperature: w.temperature_display(),
            humidity: w.humidity_display(),
            condition: w.condition_display().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadingDto {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ChallengeDto {
    pub index: usize,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct SpeciesDto {
    pub index: usize,
    pub name: String,
    pub population: String,
    pub description: String,
    pub has_image: bool,
}

/// Everything the page shows, recomputed from the session on every render
#[derive(Debug, Serialize)]
pub struct SessionViewDto {
    pub session_id: String,
    pub city: Option<String>,
    pub interests: Interests,
    pub weather: Option<WeatherDto>,
    pub narrative: Option<String>,
    pub mood: Option<Mood>,
    pub media_description: Option<String>,
    pub story: Option<String>,
    pub has_music: bool,
    pub has_image: bool,
    pub environmental_data: Option<Vec<ReadingDto>>,
    pub challenges: Vec<ChallengeDto>,
    pub challenges_date: Option<NaiveDate>,
    pub points: u32,
    pub species_unlocked: bool,
    pub species: Vec<SpeciesDto>,
    pub ngos: Vec<Ngo>,
    pub notices: Vec<Notice>,
}

impl SessionViewDto {
    pub fn render(session: &EcoSession, notices: Vec<Notice>) -> Self {
        let (narrative, mood, media_description) = match (&session.city, &session.weather) {
            (Some(city), Some(weather)) => {
                let mood = Mood::classify(weather);
                (
                    Some(build_narrative(city, weather)),
                    Some(mood),
                    Some(build_media_description(mood, weather)),
                )
            }
            _ => (None, None, None),
        };

        Self {
            session_id: session.id.to_string(),
            city: session.city.clone(),
            interests: session.interests.clone(),
            weather: session.weather.as_ref().map(WeatherDto::from),
            narrative,
            mood,
            media_description,
            story: session.story.clone(),
            has_music: session.music.is_some(),
            has_image: session.image.is_some(),
            environmental_data: session.environmental_data.as_ref().map(readings),
            challenges: session
                .challenges
                .challenges()
                .iter()
                .enumerate()
                .map(|(index, c)| ChallengeDto {
                    index,
                    text: c.text.clone(),
                    completed: c.completed,
                })
                .collect(),
            challenges_date: session.challenges.generated_on(),
            points: session.challenges.points(),
            species_unlocked: session.challenges.all_completed(),
            species: session
                .species
                .iter()
                .enumerate()
                .map(|(index, entry)| SpeciesDto {
                    index,
                    name: entry.species.name.clone(),
                    population: entry.species.population.clone(),
                    description: entry.species.description.clone(),
                    has_image: entry.image.is_some(),
                })
                .collect(),
            ngos: session.ngos.clone(),
            notices,
        }
    }
}

fn readings(data: &EnvironmentalData) -> Vec<ReadingDto> {
    data.rows()
        .into_iter()
        .map(|(label, value)| ReadingDto { label, value })
        .collect()
}
