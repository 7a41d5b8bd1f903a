//! Domain layer - Core logic with no I/O
//!
//! This layer contains:
//! - Entities: session record, challenge board, species, NGOs, environmental data
//! - Value Objects: weather snapshot, mood, interests, media assets, ids
//! - Domain Services: narrative and media-description builders

pub mod entities;
pub mod services;
pub mod value_objects;
