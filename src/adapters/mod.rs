//! Infrastructure adapters. Implement outbound ports and drive the inbound one.
//!
//! Completion service, clock, console. Map errors to DomainError.

pub mod ai;
pub mod clock;
pub mod ui;
