//! Event pipeline. Sequences extraction -> detail parsing -> confirmation.
//!
//! - Stops with `None` when the input is not an event or confidence is below threshold
//! - Each stage awaits the previous one; nothing runs in parallel
//! - Stage failures propagate unchanged, no retries

use super::{ConfirmationStage, DetailParsingStage, ExtractionStage};
use crate::domain::{ConfirmationResult, DEFAULT_CONFIDENCE_THRESHOLD, DomainError};
use crate::ports::{ClockPort, CompletionPort, EventRequestPort};
use crate::shared::config::{DEFAULT_MODEL, DEFAULT_SIGNATURE};
use std::sync::Arc;
use tracing::info;

/// Policy shared by the stages of one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub model: String,
    /// Inclusive lower bound on `confidence_score`.
    pub confidence_threshold: f64,
    pub signature: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            signature: DEFAULT_SIGNATURE.to_string(),
        }
    }
}

/// Orchestrator for a single free-text request.
///
/// Holds only shared, read-only adapters, so one instance can serve concurrent callers.
pub struct EventPipeline {
    extraction: ExtractionStage,
    details: DetailParsingStage,
    confirmation: ConfirmationStage,
    settings: PipelineSettings,
}

impl EventPipeline {
    pub fn new(
        completion: Arc<dyn CompletionPort>,
        clock: Arc<dyn ClockPort>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            extraction: ExtractionStage::new(
                Arc::clone(&completion),
                Arc::clone(&clock),
                settings.model.clone(),
            ),
            details: DetailParsingStage::new(
                Arc::clone(&completion),
                clock,
                settings.model.clone(),
            ),
            confirmation: ConfirmationStage::new(
                completion,
                settings.model.clone(),
                settings.signature.clone(),
            ),
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run the full pipeline on `user_input`.
    ///
    /// Returns `Ok(None)` for non-events; that is a normal outcome, not an error.
    pub async fn process(
        &self,
        user_input: &str,
    ) -> Result<Option<ConfirmationResult>, DomainError> {
        info!(input_len = user_input.len(), "processing calendar request");

        let extraction = self.extraction.extract(user_input).await?;
        if !extraction.qualifies(self.settings.confidence_threshold) {
            info!(
                is_calendar_event = extraction.is_calendar_event,
                confidence = extraction.confidence_score,
                threshold = self.settings.confidence_threshold,
                "not a calendar event or low confidence"
            );
            return Ok(None);
        }

        info!(
            confidence = extraction.confidence_score,
            "calendar event detected, parsing details"
        );
        let details = self.details.parse_details(&extraction.description).await?;

        let confirmation = self.confirmation.generate_confirmation(&details).await?;
        info!(event = %details.name, "confirmation ready");

        Ok(Some(confirmation))
    }
}

#[async_trait::async_trait]
impl EventRequestPort for EventPipeline {
    async fn process(&self, user_input: &str) -> Result<Option<ConfirmationResult>, DomainError> {
        EventPipeline::process(self, user_input).await
    }
}
