//! Cross-cutting pieces: configuration and startup wiring.

pub mod bootstrap;
pub mod config;

pub use bootstrap::build_pipeline;
pub use config::AppConfig;
