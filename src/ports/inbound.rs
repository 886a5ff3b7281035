//! Inbound port. Entry adapters (CLI) call into the application.

use crate::domain::{ConfirmationResult, DomainError};

/// Turn free text into a confirmation, or `None` when it is not an event.
#[async_trait::async_trait]
pub trait EventRequestPort: Send + Sync {
    async fn process(&self, user_input: &str) -> Result<Option<ConfirmationResult>, DomainError>;
}
