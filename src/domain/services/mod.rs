//! Domain services - Pure text builders over weather and mood

mod narrative;

pub use narrative::{build_media_description, build_narrative};
