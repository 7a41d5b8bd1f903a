//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod media_port;
mod upstream_error;
mod weather_port;

pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse};
pub use media_port::MediaGenerationPort;
pub use upstream_error::UpstreamError;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub mod mock;
