//! Third stage: draft a human-readable confirmation for parsed event details.

use crate::domain::{ChatMessage, ConfirmationResult, DomainError, EventDetails};
use crate::ports::{CompletionPort, request_structured};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub struct ConfirmationStage {
    completion: Arc<dyn CompletionPort>,
    model: String,
    signature: String,
}

impl ConfirmationStage {
    pub fn new(completion: Arc<dyn CompletionPort>, model: String, signature: String) -> Self {
        Self {
            completion,
            model,
            signature,
        }
    }

    fn system_prompt(&self) -> String {
        format!(
            "Generate a natural confirmation message for the event. Sign off with your name; {}",
            self.signature
        )
    }

    /// Field mapping of `details` sent as the user message.
    fn event_fields(details: &EventDetails) -> String {
        json!({
            "name": details.name,
            "date": details.date,
            "duration_minutes": details.duration_minutes,
            "participants": details.participants,
        })
        .to_string()
    }

    /// Ask for a confirmation. `calendar_link` is passed through as returned, absent if omitted.
    pub async fn generate_confirmation(
        &self,
        details: &EventDetails,
    ) -> Result<ConfirmationResult, DomainError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(Self::event_fields(details)),
        ];
        let result: ConfirmationResult =
            request_structured(self.completion.as_ref(), &self.model, messages).await?;
        debug!(
            message_len = result.confirmation_message.len(),
            has_link = result.calendar_link.is_some(),
            "confirmation generated"
        );
        Ok(result)
    }
}
