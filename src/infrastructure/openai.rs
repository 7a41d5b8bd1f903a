//! OpenAI-compatible chat-completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ports::outbound::{
    ChatMessage, LlmPort, LlmRequest, LlmResponse, UpstreamError,
};

/// Client for an OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    #[instrument(skip(self, request), fields(model = %self.model, messages = request.messages.len()))]
    pub async fn chat_completion(
        &self,
        request: &LlmRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: request.ordered_messages(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        debug!(choices = completion.choices.len(), "Chat completion received");
        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} {body}")]
    ApiError { status: u16, body: String },
    #[error("completion contained no choices")]
    NoChoices,
}

impl From<OpenAiError> for UpstreamError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::HttpError(e) if e.is_decode() => UpstreamError::InvalidResponse(e.to_string()),
            OpenAiError::HttpError(e) => UpstreamError::Transport(e.to_string()),
            OpenAiError::ApiError { status, body } => UpstreamError::Unavailable { status, body },
            OpenAiError::NoChoices => {
                UpstreamError::InvalidResponse("completion contained no choices".to_string())
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    fn into_llm_response(self, fallback_model: &str) -> Result<LlmResponse, OpenAiError> {
        let choice = self.choices.into_iter().next().ok_or(OpenAiError::NoChoices)?;
        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| fallback_model.to_string()),
            tokens_used: self.usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }
}

// =============================================================================
// LlmPort Implementation
// =============================================================================

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, UpstreamError> {
        let completion = self.chat_completion(&request).await?;
        Ok(completion.into_llm_response(&self.model)?)
    }
}
