//! Eco Content Service - Challenges, species, NGOs and environmental data
//!
//! Each generator issues one chat request built by the prompt builder and
//! parses the reply with the strict response parser.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::llm::{prompt_builder, response_parser, ResponseParseError};
use crate::application::ports::outbound::{LlmPort, LlmRequest, UpstreamError};
use crate::domain::entities::{EndangeredSpecies, EnvironmentalData, Ngo};
use crate::domain::value_objects::Interests;

pub struct EcoContentService {
    llm: Arc<dyn LlmPort>,
}

impl EcoContentService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Today's challenges for the city, in the order the model listed them
    #[instrument(skip(self, interests))]
    pub async fn generate_challenges(
        &self,
        city: &str,
        interests: &Interests,
    ) -> Result<Vec<String>, ContentError> {
        let text = self
            .complete(prompt_builder::challenges_request(city, interests))
            .await?;
        let challenges = response_parser::parse_challenges(&text)?;
        debug!(count = challenges.len(), "Challenges generated");
        Ok(challenges)
    }

    #[instrument(skip(self))]
    pub async fn generate_species(&self, city: &str) -> Result<Vec<EndangeredSpecies>, ContentError> {
        let text = self.complete(prompt_builder::species_request(city)).await?;
        let species = response_parser::parse_species(&text)?;
        debug!(count = species.len(), "Species generated");
        Ok(species)
    }

    #[instrument(skip(self, interests))]
    pub async fn generate_ngos(
        &self,
        city: &str,
        interests: &Interests,
    ) -> Result<Vec<Ngo>, ContentError> {
        let text = self
            .complete(prompt_builder::ngos_request(city, interests))
            .await?;
        let ngos = response_parser::parse_ngos(&text)?;
        debug!(count = ngos.len(), "NGOs generated");
        Ok(ngos)
    }

    #[instrument(skip(self))]
    pub async fn generate_environmental_data(
        &self,
        city: &str,
    ) -> Result<EnvironmentalData, ContentError> {
        let text = self
            .complete(prompt_builder::environmental_data_request(city))
            .await?;
        Ok(response_parser::parse_environmental_data(&text)?)
    }

    async fn complete(&self, request: LlmRequest) -> Result<String, ContentError> {
        let response = self.llm.generate(request).await?;
        Ok(response.content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("LLM error: {0}")]
    Llm(#[from] UpstreamError),
    #[error("Parse error: {0}")]
    Parse(#[from] ResponseParseError),
}
