//! Implements the CLI side of EventRequestPort: one request in, rendered text out.

use crate::domain::{ConfirmationResult, DomainError};
use crate::ports::EventRequestPort;
use std::sync::Arc;
use tracing::info;

/// Used when no text is given on the command line.
pub const EXAMPLE_INPUT: &str = "Let's schedule a 1h team meeting next Tuesday at 2pm with Alice and Bob to discuss the project roadmap.";

pub const NOT_AN_EVENT_MESSAGE: &str = "This doesn't appear to be a calendar event.";

/// Join CLI arguments into the request text, falling back to `EXAMPLE_INPUT`.
pub fn input_from_args<I: IntoIterator<Item = String>>(args: I) -> String {
    let joined = args.into_iter().collect::<Vec<_>>().join(" ");
    if joined.trim().is_empty() {
        EXAMPLE_INPUT.to_string()
    } else {
        joined
    }
}

/// Render the pipeline outcome as printed on stdout.
pub fn render_outcome(outcome: Option<&ConfirmationResult>) -> String {
    match outcome {
        Some(result) => {
            let mut out = format!("Confirmation: {}", result.confirmation_message);
            if let Some(link) = &result.calendar_link {
                out.push_str(&format!("\nCalendar Link: {}", link));
            }
            out
        }
        None => NOT_AN_EVENT_MESSAGE.to_string(),
    }
}

/// Console adapter. Drives the inbound port for a single request.
pub struct ConsoleRunner {
    port: Arc<dyn EventRequestPort>,
}

impl ConsoleRunner {
    pub fn new(port: Arc<dyn EventRequestPort>) -> Self {
        Self { port }
    }

    /// Process `user_input` and return the text to print.
    pub async fn run(&self, user_input: &str) -> Result<String, DomainError> {
        info!(input_len = user_input.len(), "processing request");
        let outcome = self.port.process(user_input).await?;
        Ok(render_outcome(outcome.as_ref()))
    }
}
