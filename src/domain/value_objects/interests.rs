//! User-selected interest tags

use serde::{Deserialize, Serialize};

/// Tags offered by the page's multi-select. Any other non-empty tag is accepted too.
pub const SUGGESTED_INTERESTS: &[&str] = &[
    "Wildlife Conservation",
    "Climate Action",
    "Ocean Protection",
    "Reforestation",
    "Renewable Energy",
    "Waste Reduction",
    "Sustainable Agriculture",
];

/// Ordered, de-duplicated set of interest tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Interests(Vec<String>);

impl Interests {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            if !normalized.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                normalized.push(tag.to_string());
            }
        }
        Self(normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Human readable list for prompts, e.g. "Reforestation, Climate Action"
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for Interests {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl From<Interests> for Vec<String> {
    fn from(interests: Interests) -> Self {
        interests.0
    }
}
