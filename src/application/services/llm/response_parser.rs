//! Strict parsers for structured LLM output
//!
//! Model output is treated as untrusted data. It is only ever parsed as JSON
//! into typed records; anything that does not match the expected shape is
//! rejected.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::{EndangeredSpecies, EnvironmentalData, Ngo};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("response is empty")]
    Empty,
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
    #[error("item {index} is malformed: {message}")]
    InvalidItem { index: usize, message: String },
}

/// Parse a JSON array of species records
pub fn parse_species(text: &str) -> Result<Vec<EndangeredSpecies>, ResponseParseError> {
    parse_record_list(text)
}

/// Parse a JSON array of NGO records
pub fn parse_ngos(text: &str) -> Result<Vec<Ngo>, ResponseParseError> {
    parse_record_list(text)
}

/// Parse a JSON object of environmental indicators.
///
/// The indicators may sit under a single `"data"` key; the wrapped object is
/// held to the same strict shape as a bare one.
pub fn parse_environmental_data(text: &str) -> Result<EnvironmentalData, ResponseParseError> {
    let value = match parse_json(text)? {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    if !value.is_object() {
        return Err(ResponseParseError::UnexpectedShape {
            expected: "a JSON object",
            found: json_kind(&value),
        });
    }
    serde_json::from_value(value).map_err(|e| ResponseParseError::InvalidItem {
        index: 0,
        message: e.to_string(),
    })
}

/// Parse the challenge list.
///
/// A JSON array of strings is preferred. Text that is not JSON at all falls
/// back to one challenge per non-empty line; any other JSON value is rejected.
pub fn parse_challenges(text: &str) -> Result<Vec<String>, ResponseParseError> {
    let body = strip_code_fence(text);
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Value::String(s) => {
                    let s = s.trim();
                    (!s.is_empty()).then(|| Ok(s.to_string()))
                }
                other => Some(Err(ResponseParseError::InvalidItem {
                    index,
                    message: format!("expected a string, found {}", json_kind(&other)),
                })),
            })
            .collect(),
        Ok(other) => Err(ResponseParseError::UnexpectedShape {
            expected: "a JSON array of strings",
            found: json_kind(&other),
        }),
        Err(_) => Ok(split_lines(text)),
    }
}

/// One entry per non-empty line, trimmed, order preserved
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON array whose every element is an object of type `T`
fn parse_record_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ResponseParseError> {
    let value = parse_json(text)?;
    let Value::Array(items) = value else {
        return Err(ResponseParseError::UnexpectedShape {
            expected: "a JSON array",
            found: json_kind(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ResponseParseError::InvalidItem {
                    index,
                    message: format!("expected an object, found {}", json_kind(&item)),
                });
            }
            serde_json::from_value(item).map_err(|e| ResponseParseError::InvalidItem {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn parse_json(text: &str) -> Result<Value, ResponseParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(ResponseParseError::Empty);
    }
    serde_json::from_str(body).map_err(|e| ResponseParseError::InvalidJson(e.to_string()))
}

/// Remove one surrounding Markdown code fence, e.g. ```json ... ```
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
