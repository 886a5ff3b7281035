//! First stage: decide whether free text describes a calendar event.

use super::prompt_date;
use crate::domain::{ChatMessage, DomainError, ExtractionResult};
use crate::ports::{ClockPort, CompletionPort, request_structured};
use std::sync::Arc;
use tracing::debug;

pub struct ExtractionStage {
    completion: Arc<dyn CompletionPort>,
    clock: Arc<dyn ClockPort>,
    model: String,
}

impl ExtractionStage {
    pub fn new(completion: Arc<dyn CompletionPort>, clock: Arc<dyn ClockPort>, model: String) -> Self {
        Self {
            completion,
            clock,
            model,
        }
    }

    fn system_prompt(&self) -> String {
        format!(
            "Today is {}. Analyze whether the text describes a calendar event.",
            prompt_date(self.clock.as_ref())
        )
    }

    /// Classify `user_input`. The service's answer is returned as-is, including the score.
    pub async fn extract(&self, user_input: &str) -> Result<ExtractionResult, DomainError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(user_input),
        ];
        let result: ExtractionResult =
            request_structured(self.completion.as_ref(), &self.model, messages).await?;
        debug!(
            is_calendar_event = result.is_calendar_event,
            confidence = result.confidence_score,
            "extraction complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionAdapter;
    use crate::adapters::clock::FixedClock;
    use crate::domain::{Role, ServiceError};
    use crate::ports::StructuredOutput;
    use chrono::NaiveDate;
    use serde_json::json;

    fn stage(mock: Arc<MockCompletionAdapter>) -> ExtractionStage {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        ExtractionStage::new(mock, Arc::new(FixedClock(today)), "gpt-test".to_string())
    }

    #[tokio::test]
    async fn test_extract_builds_two_message_conversation() {
        let mock = Arc::new(MockCompletionAdapter::new());
        mock.respond(
            ExtractionResult::SCHEMA_NAME,
            json!({"description": "Lunch", "is_calendar_event": true, "confidence_score": 0.8}),
        );

        stage(mock.clone()).extract("Lunch with Sam tomorrow").await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.model, "gpt-test");
        assert_eq!(request.schema.name, "event_extraction");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(
            request.messages[0].content,
            "Today is Friday, October 16, 2026. Analyze whether the text describes a calendar event."
        );
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Lunch with Sam tomorrow");
    }

    #[tokio::test]
    async fn test_extract_does_not_clamp_score() {
        let mock = Arc::new(MockCompletionAdapter::new());
        mock.respond(
            ExtractionResult::SCHEMA_NAME,
            json!({"description": "x", "is_calendar_event": true, "confidence_score": 1.7}),
        );

        let result = stage(mock).extract("x").await.unwrap();
        assert_eq!(result.confidence_score, 1.7);
    }

    #[tokio::test]
    async fn test_extract_malformed_value_is_schema_error() {
        let mock = Arc::new(MockCompletionAdapter::new());
        mock.respond(ExtractionResult::SCHEMA_NAME, json!({"description": "x"}));

        let err = stage(mock).extract("x").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Service(ServiceError::Schema { ref schema, .. }) if schema == "event_extraction"
        ));
    }
}
