//! Endangered species revealed once every challenge is done

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MediaAsset;

/// One endangered species record as produced by the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndangeredSpecies {
    pub name: String,
    pub population: String,
    pub description: String,
}

impl EndangeredSpecies {
    /// Prompt used to illustrate this species
    pub fn image_prompt(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// A species paired with its generated illustration, if any
#[derive(Debug, Clone)]
pub struct SpeciesEntry {
    pub species: EndangeredSpecies,
    pub image: Option<MediaAsset>,
}
