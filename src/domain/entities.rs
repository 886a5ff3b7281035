//! Domain entities. Pure data structures for the event pipeline.
//!
//! Each record is produced whole by one stage and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Minimum extraction confidence (inclusive) for an input to continue past classification.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Output of the classification stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Raw description of the event as understood by the model.
    pub description: String,
    pub is_calendar_event: bool,
    /// Expected in [0, 1]; not clamped locally.
    pub confidence_score: f64,
}

impl ExtractionResult {
    /// True when the input is an event and confidence reaches `threshold`.
    ///
    /// NaN never qualifies.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_calendar_event && self.confidence_score >= threshold
    }
}

/// Structured event fields parsed from a confirmed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub name: String,
    /// ISO 8601 date/time, as produced by the model.
    pub date: String,
    pub duration_minutes: u32,
    pub participants: Vec<String>,
}

/// Terminal output of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationResult {
    pub confirmation_message: String,
    #[serde(default)]
    pub calendar_link: Option<String>,
}
