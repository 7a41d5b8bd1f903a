//! Prompt construction and strict parsing of model output

pub mod prompt_builder;
pub mod response_parser;

pub use response_parser::ResponseParseError;
