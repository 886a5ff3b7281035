//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError, Role, ServiceError};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Named JSON schema the completion service must conform to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

impl ResponseSchema {
    pub fn of<T: StructuredOutput>() -> Self {
        Self {
            name: T::SCHEMA_NAME.to_string(),
            schema: T::json_schema(),
        }
    }
}

/// One structured-output completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub schema: ResponseSchema,
}

impl CompletionRequest {
    /// Content of the last user message, if any.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// A record the completion service can be asked to produce.
///
/// Implementations describe the JSON schema sent to the service; decoding is serde.
pub trait StructuredOutput: DeserializeOwned + Send {
    const SCHEMA_NAME: &'static str;

    fn json_schema() -> serde_json::Value;
}

/// Text-completion service with a structured-output contract.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send the conversation and return the JSON value produced for `request.schema`.
    ///
    /// # Errors
    /// Transport, API, refusal or malformed-body failures as `ServiceError`.
    async fn complete(&self, request: &CompletionRequest)
    -> Result<serde_json::Value, ServiceError>;
}

/// Source of the current date used in prompts.
pub trait ClockPort: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Issue one completion call and decode the result into `T`.
///
/// A value that does not fit `T` is reported as `ServiceError::Schema`.
pub async fn request_structured<T: StructuredOutput>(
    completion: &dyn CompletionPort,
    model: &str,
    messages: Vec<ChatMessage>,
) -> Result<T, DomainError> {
    let request = CompletionRequest {
        model: model.to_string(),
        messages,
        schema: ResponseSchema::of::<T>(),
    };
    let value = completion.complete(&request).await?;
    serde_json::from_value(value).map_err(|e| {
        DomainError::Service(ServiceError::Schema {
            schema: T::SCHEMA_NAME.to_string(),
            reason: e.to_string(),
        })
    })
}
