//! User-visible failure messages produced while running an action

use serde::Serialize;

/// Step of the pipeline a notice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    Weather,
    Story,
    Music,
    Image,
    Challenges,
    Species,
    SpeciesImage,
    Ngos,
    EnvironmentalData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub step: PipelineStep,
    pub message: String,
}

impl Notice {
    pub fn new(step: PipelineStep, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

/// Turn a step result into an optional value, recording a notice on failure
pub(crate) fn record<T, E: std::fmt::Display>(
    notices: &mut Vec<Notice>,
    step: PipelineStep,
    context: &str,
    result: Result<T, E>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(?step, error = %e, "{}", context);
            notices.push(Notice::new(step, format!("{}: {}", context, e)));
            None
        }
    }
}
