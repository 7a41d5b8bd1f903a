//! Story Service - Short weather stories from the language model

use std::sync::Arc;

use tracing::{debug, instrument};

use super::llm::prompt_builder;
use crate::application::ports::outbound::{LlmPort, UpstreamError};
use crate::domain::value_objects::Mood;

/// Generates the short story that the image is drawn from
pub struct StoryService {
    llm: Arc<dyn LlmPort>,
}

impl StoryService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// One chat request embedding the narrative and mood; returns the trimmed reply
    #[instrument(skip(self, narrative), fields(mood = %mood))]
    pub async fn generate_story(&self, narrative: &str, mood: Mood) -> Result<String, StoryError> {
        let request = prompt_builder::story_request(narrative, mood);
        let response = self.llm.generate(request).await?;
        debug!(model = %response.model, tokens = response.tokens_used, "Story generated");

        let story = response.content.trim();
        if story.is_empty() {
            return Err(StoryError::Empty);
        }
        Ok(story.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("LLM error: {0}")]
    Llm(#[from] UpstreamError),
    #[error("the model returned an empty story")]
    Empty,
}
