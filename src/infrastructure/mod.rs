//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: the page and its JSON API
//! - OpenWeather: current conditions for a city
//! - OpenAI: chat completions for stories and structured content
//! - Hugging Face: music and image generation
//! - Config: Application configuration
//! - State: Shared application state
//! - Session: Visitor session storage

pub mod config;
pub mod http;
pub mod huggingface;
pub mod openai;
pub mod openweather;
pub mod session;
pub mod state;
