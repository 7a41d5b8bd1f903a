//! Symphony Service - The city-to-story-music-image pipeline
//!
//! Every operation takes the visitor's [`EcoSession`] by value and hands back
//! the updated record together with the notices raised along the way. Steps
//! fail independently: a failed step clears its own field and reports a
//! notice, later steps that need its output are skipped.
//!
//! ```text
//! weather -> mood/narrative/description -> story
//!         -> (music | image | challenges | NGOs | environmental data)
//! ```

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use tracing::{info, instrument, warn};

use super::notice::{record, Notice, PipelineStep};
use super::{EcoContentService, StoryService};
use crate::application::ports::outbound::{LlmPort, MediaGenerationPort, WeatherPort};
use crate::domain::entities::{ChallengeBoard, EcoSession, SpeciesEntry};
use crate::domain::services::{build_media_description, build_narrative};
use crate::domain::value_objects::{Interests, Mood};

/// Result of one action: the session to store and what to tell the user
#[derive(Debug)]
pub struct SessionUpdate {
    pub session: EcoSession,
    pub notices: Vec<Notice>,
}

impl SessionUpdate {
    fn new(session: EcoSession, notices: Vec<Notice>) -> Self {
        Self { session, notices }
    }
}

pub struct SymphonyService {
    weather: Arc<dyn WeatherPort>,
    media: Arc<dyn MediaGenerationPort>,
    story: StoryService,
    content: EcoContentService,
}

impl SymphonyService {
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        llm: Arc<dyn LlmPort>,
        media: Arc<dyn MediaGenerationPort>,
    ) -> Self {
        Self {
            weather,
            media,
            story: StoryService::new(llm.clone()),
            content: EcoContentService::new(llm),
        }
    }

    /// Run the whole pipeline for `city`.
    ///
    /// When the weather lookup fails nothing downstream runs and the session
    /// comes back untouched.
    #[instrument(skip(self, session, interests), fields(session_id = %session.id))]
    pub async fn run(
        &self,
        mut session: EcoSession,
        city: &str,
        interests: Interests,
    ) -> SessionUpdate {
        let mut notices = Vec::new();

        let weather = match self.weather.current_weather(city).await {
            Ok(weather) => weather,
            Err(e) => {
                warn!(error = %e, "Weather lookup failed, skipping pipeline");
                notices.push(Notice::new(
                    PipelineStep::Weather,
                    format!("Error fetching weather data: {}", e),
                ));
                return SessionUpdate::new(session, notices);
            }
        };

        let mood = Mood::classify(&weather);
        let narrative = build_narrative(city, &weather);
        let description = build_media_description(mood, &weather);
        info!(%mood, %description, "Weather classified");

        let story = record(
            &mut notices,
            PipelineStep::Story,
            "Error generating story",
            self.story.generate_story(&narrative, mood).await,
        );

        let image = async {
            match &story {
                Some(story) => Some(self.media.generate_image(story).await),
                None => None,
            }
        };

        let (music, image, challenges, ngos, environmental_data) = tokio::join!(
            self.media.generate_music(&description),
            image,
            self.content.generate_challenges(city, &interests),
            self.content.generate_ngos(city, &interests),
            self.content.generate_environmental_data(city),
        );

        session.music = record(
            &mut notices,
            PipelineStep::Music,
            "Error generating music",
            music,
        );
        session.image = match image {
            Some(result) => record(
                &mut notices,
                PipelineStep::Image,
                "Error generating image",
                result,
            ),
            None => {
                notices.push(Notice::new(
                    PipelineStep::Image,
                    "Image skipped because no story was generated",
                ));
                None
            }
        };

        let board = record(
            &mut notices,
            PipelineStep::Challenges,
            "Error generating challenges",
            challenges,
        )
        .map(|texts| ChallengeBoard::new(texts, Utc::now().date_naive()))
        .unwrap_or_default();
        session.replace_challenges(board);

        session.ngos = record(
            &mut notices,
            PipelineStep::Ngos,
            "Error finding NGOs",
            ngos,
        )
        .unwrap_or_default();
        session.environmental_data = record(
            &mut notices,
            PipelineStep::EnvironmentalData,
            "Error parsing simulated data",
            environmental_data,
        );

        session.city = Some(city.to_string());
        session.interests = interests;
        session.weather = Some(weather);
        session.story = story;
        session.touch();

        info!(notices = notices.len(), "Symphony complete");
        SessionUpdate::new(session, notices)
    }

    /// Ask for a fresh set of today's challenges; completion starts over
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub async fn regenerate_challenges(
        &self,
        mut session: EcoSession,
    ) -> Result<SessionUpdate, SymphonyError> {
        let city = session.city.clone().ok_or(SymphonyError::NoCity)?;
        let mut notices = Vec::new();

        let board = record(
            &mut notices,
            PipelineStep::Challenges,
            "Error generating challenges",
            self.content
                .generate_challenges(&city, &session.interests)
                .await,
        )
        .map(|texts| ChallengeBoard::new(texts, Utc::now().date_naive()))
        .unwrap_or_default();

        session.replace_challenges(board);
        session.touch();
        Ok(SessionUpdate::new(session, notices))
    }

    /// Generate the endangered-species panel, one illustration per species.
    ///
    /// Only allowed once every challenge on the board is completed.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub async fn reveal_species(
        &self,
        mut session: EcoSession,
    ) -> Result<SessionUpdate, SymphonyError> {
        if !session.challenges.all_completed() {
            return Err(SymphonyError::SpeciesLocked);
        }
        let city = session.city.clone().ok_or(SymphonyError::NoCity)?;
        let mut notices = Vec::new();

        let species = record(
            &mut notices,
            PipelineStep::Species,
            "Error parsing endangered species data",
            self.content.generate_species(&city).await,
        )
        .unwrap_or_default();

        let images = join_all(species.iter().map(|s| {
            let prompt = s.image_prompt();
            async move { self.media.generate_image(&prompt).await }
        }))
        .await;

        let mut entries = Vec::with_capacity(species.len());
        for (species, image) in species.into_iter().zip(images) {
            let context = format!("Error generating image for {}", species.name);
            let image = record(&mut notices, PipelineStep::SpeciesImage, &context, image);
            entries.push(SpeciesEntry { species, image });
        }

        session.species = entries;
        session.touch();
        Ok(SessionUpdate::new(session, notices))
    }

    /// Find NGOs for the session city with a new set of interests
    #[instrument(skip(self, session, interests), fields(session_id = %session.id))]
    pub async fn refresh_ngos(
        &self,
        mut session: EcoSession,
        interests: Interests,
    ) -> Result<SessionUpdate, SymphonyError> {
        let city = session.city.clone().ok_or(SymphonyError::NoCity)?;
        let mut notices = Vec::new();

        session.ngos = record(
            &mut notices,
            PipelineStep::Ngos,
            "Error finding NGOs",
            self.content.generate_ngos(&city, &interests).await,
        )
        .unwrap_or_default();
        session.interests = interests;
        session.touch();
        Ok(SessionUpdate::new(session, notices))
    }
}

/// Requests that cannot run against the current session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymphonyError {
    #[error("No city yet: generate a symphony for a city first")]
    NoCity,
    #[error("Complete all of today's challenges to reveal endangered species")]
    SpeciesLocked,
}
