//! event-assist: classify free text as a calendar event, parse it, and draft a confirmation.
//!
//! Hexagonal layout: the pipeline talks to the completion service only through ports.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
