//! JSON schemas for the structured records requested from the completion service.
//!
//! Written for OpenAI strict mode: every property required, no additional properties.

use crate::domain::{ConfirmationResult, EventDetails, ExtractionResult};
use crate::ports::StructuredOutput;
use serde_json::json;

impl StructuredOutput for ExtractionResult {
    const SCHEMA_NAME: &'static str = "event_extraction";

    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Raw description of the event"
                },
                "is_calendar_event": {
                    "type": "boolean",
                    "description": "Whether this text describes a calendar event"
                },
                "confidence_score": {
                    "type": "number",
                    "description": "Confidence score between 0 and 1"
                }
            },
            "required": ["description", "is_calendar_event", "confidence_score"],
            "additionalProperties": false
        })
    }
}

impl StructuredOutput for EventDetails {
    const SCHEMA_NAME: &'static str = "event_details";

    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the event"
                },
                "date": {
                    "type": "string",
                    "description": "Date and time of the event. Use ISO 8601 to format this value."
                },
                "duration_minutes": {
                    "type": "integer",
                    "description": "Expected duration in minutes"
                },
                "participants": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of participants"
                }
            },
            "required": ["name", "date", "duration_minutes", "participants"],
            "additionalProperties": false
        })
    }
}

impl StructuredOutput for ConfirmationResult {
    const SCHEMA_NAME: &'static str = "event_confirmation";

    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "confirmation_message": {
                    "type": "string",
                    "description": "Natural language confirmation message"
                },
                "calendar_link": {
                    "type": ["string", "null"],
                    "description": "Generated calendar link if applicable"
                }
            },
            "required": ["confirmation_message", "calendar_link"],
            "additionalProperties": false
        })
    }
}
