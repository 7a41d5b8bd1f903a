//! Value objects - Immutable objects defined by their attributes

mod ids;
mod interests;
mod media;
mod mood;
mod weather;

pub use ids::SessionId;
pub use interests::{Interests, SUGGESTED_INTERESTS};
pub use media::MediaAsset;
pub use mood::Mood;
pub use weather::{WeatherSnapshot, DATA_NOT_AVAILABLE};
