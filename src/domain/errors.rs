//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Missing credential or unusable configuration. Raised before any stage runs.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion service error: {0}")]
    Service(#[from] ServiceError),
}

/// Failure of a single completion call. Never retried inside the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No response choices returned")]
    EmptyResponse,

    #[error("Model refused the request: {0}")]
    Refused(String),

    /// Response could not be coerced into the requested schema.
    #[error("Response does not match schema '{schema}': {reason}")]
    Schema { schema: String, reason: String },
}
