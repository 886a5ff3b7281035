//! Second stage: turn a confirmed event description into structured fields.

use super::prompt_date;
use crate::domain::{ChatMessage, DomainError, EventDetails};
use crate::ports::{ClockPort, CompletionPort, request_structured};
use std::sync::Arc;
use tracing::debug;

pub struct DetailParsingStage {
    completion: Arc<dyn CompletionPort>,
    clock: Arc<dyn ClockPort>,
    model: String,
}

impl DetailParsingStage {
    pub fn new(completion: Arc<dyn CompletionPort>, clock: Arc<dyn ClockPort>, model: String) -> Self {
        Self {
            completion,
            clock,
            model,
        }
    }

    fn system_prompt(&self) -> String {
        format!(
            "Today is {}. Extract detailed event information. When dates reference \
             'next Tuesday' or similar relative dates, use this current date as reference.",
            prompt_date(self.clock.as_ref())
        )
    }

    /// Parse `description` into event fields. No cross-field validation is done here.
    pub async fn parse_details(&self, description: &str) -> Result<EventDetails, DomainError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(description),
        ];
        let details: EventDetails =
            request_structured(self.completion.as_ref(), &self.model, messages).await?;
        debug!(
            name = %details.name,
            date = %details.date,
            duration_minutes = details.duration_minutes,
            participants = details.participants.len(),
            "parsed event details"
        );
        Ok(details)
    }
}
