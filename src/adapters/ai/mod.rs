//! AI adapter module. Implements CompletionPort for LLM integration.
//!
//! Provides OpenAI-compatible adapter, the record schemas, and a scripted mock for testing.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod schemas;

pub use mock_adapter::MockCompletionAdapter;
pub use openai_adapter::OpenAiAdapter;
