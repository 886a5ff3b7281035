//! OpenAI-compatible adapter for structured completions.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances that accept
//! `response_format: json_schema`. Implements `CompletionPort` with markdown stripping.

use crate::domain::{ChatMessage, DomainError, ServiceError};
use crate::ports::{CompletionPort, CompletionRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible completion adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API with structured outputs
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - Bearer credential
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create an adapter whose HTTP client aborts requests after `timeout`.
    pub fn with_timeout(
        api_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Sanitize JSON content from the LLM.
    ///
    /// Some OpenAI-compatible servers wrap JSON in markdown code blocks. This strips them.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        if trimmed.starts_with("```") {
            let without_prefix = trimmed
                .strip_prefix("```json")
                .or_else(|| trimmed.strip_prefix("```"))
                .unwrap_or(trimmed);

            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return trimmed[start..=end].to_string();
            }
        }

        trimmed.to_string()
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a serde_json::Value,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiAdapter {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        info!(
            model = %request.model,
            schema = %request.schema.name,
            messages = request.messages.len(),
            "sending completion request"
        );

        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &request.schema.name,
                    strict: true,
                    schema: &request.schema.schema,
                },
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "completion API returned error");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        let chat_response: ChatResponse =
            response.json().await.map_err(|e| ServiceError::Schema {
                schema: request.schema.name.clone(),
                reason: format!("Failed to parse API response: {}", e),
            })?;

        let message = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(ServiceError::EmptyResponse)?;

        if let Some(refusal) = message.refusal {
            warn!(schema = %request.schema.name, "model refused structured output");
            return Err(ServiceError::Refused(refusal));
        }

        let raw_content = message.content.ok_or(ServiceError::EmptyResponse)?;
        debug!(raw_len = raw_content.len(), "received completion");

        let clean_json = Self::sanitize_json(&raw_content);
        serde_json::from_str(&clean_json).map_err(|e| {
            warn!(error = %e, json = %clean_json.chars().take(200).collect::<String>(), "JSON parse failed");
            ServiceError::Schema {
                schema: request.schema.name.clone(),
                reason: format!("Failed to parse LLM JSON: {}", e),
            }
        })
    }
}
