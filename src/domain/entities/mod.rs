//! Domain entities

mod challenge;
mod eco_session;
mod environmental_data;
mod ngo;
mod species;

pub use challenge::ChallengeBoard;
pub use eco_session::EcoSession;
pub use environmental_data::EnvironmentalData;
pub use ngo::Ngo;
pub use species::{EndangeredSpecies, SpeciesEntry};
