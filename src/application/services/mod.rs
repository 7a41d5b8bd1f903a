//! Application services - Use case implementations
//!
//! Services depend only on the outbound ports, so the HTTP layer can wire
//! them to real clients and tests can wire them to doubles.

pub mod eco_content_service;
pub mod llm;
pub mod notice;
pub mod story_service;
pub mod symphony_service;

pub use eco_content_service::EcoContentService;
pub use notice::Notice;
pub use story_service::StoryService;
pub use symphony_service::{SessionUpdate, SymphonyError, SymphonyService};
