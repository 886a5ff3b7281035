//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the CLI adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::EventRequestPort;
pub use outbound::{
    ClockPort, CompletionPort, CompletionRequest, ResponseSchema, StructuredOutput,
    request_structured,
};
