//! Core domain layer. No external I/O dependencies.
//!
//! Event records, conversation messages and errors live here. Dependencies flow inward.

pub mod conversation;
pub mod entities;
pub mod errors;

pub use conversation::{ChatMessage, Role};
pub use entities::{
    ConfirmationResult, DEFAULT_CONFIDENCE_THRESHOLD, EventDetails, ExtractionResult,
};
pub use errors::{DomainError, ServiceError};
