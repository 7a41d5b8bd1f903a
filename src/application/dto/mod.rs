//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP routes can
//! serialize/deserialize without pulling wire concerns into the domain model.

pub mod session;

pub use session::*;
