//! Mock completion adapter for testing without API calls.
//!
//! Replays scripted responses per schema and records every request it receives.

use crate::domain::ServiceError;
use crate::ports::{CompletionPort, CompletionRequest, StructuredOutput};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

type Scripted = Result<serde_json::Value, ServiceError>;

/// Scripted completion adapter.
///
/// Responses are queued per schema name and consumed in order. A request for a schema
/// with nothing queued fails with `ServiceError::Transport`.
pub struct MockCompletionAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    scripted: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionAdapter {
    /// Create a new mock adapter with no delay and nothing scripted.
    pub fn new() -> Self {
        Self::with_delay(0)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            scripted: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw JSON value for the next request against `schema_name`.
    pub fn respond(&self, schema_name: &str, value: serde_json::Value) -> &Self {
        self.push(schema_name, Ok(value))
    }

    /// Queue a record as the next response for its own schema.
    pub fn respond_with<T: StructuredOutput + Serialize>(&self, record: &T) -> &Self {
        let scripted = serde_json::to_value(record).map_err(|e| ServiceError::Schema {
            schema: T::SCHEMA_NAME.to_string(),
            reason: e.to_string(),
        });
        self.push(T::SCHEMA_NAME, scripted)
    }

    /// Queue a failure for the next request against `schema_name`.
    pub fn fail(&self, schema_name: &str, error: ServiceError) -> &Self {
        self.push(schema_name, Err(error))
    }

    /// All requests received so far, in order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received for `schema_name`.
    pub fn call_count(&self, schema_name: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.schema.name == schema_name)
            .count()
    }

    fn push(&self, schema_name: &str, scripted: Scripted) -> &Self {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(schema_name.to_string())
            .or_default()
            .push_back(scripted);
        self
    }
}

impl Default for MockCompletionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        info!(
            model = %request.model,
            schema = %request.schema.name,
            "[MOCK] Simulating completion"
        );

        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&request.schema.name)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ServiceError::Transport(format!(
                    "[MOCK] no scripted response for '{}'",
                    request.schema.name
                )))
            })
    }
}
