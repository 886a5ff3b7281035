//! Startup wiring. Builds the pipeline from configuration, failing fast on a missing credential.

use super::config::AppConfig;
use crate::adapters::ai::OpenAiAdapter;
use crate::adapters::clock::SystemClock;
use crate::domain::DomainError;
use crate::usecases::EventPipeline;
use std::sync::Arc;
use tracing::info;

/// Construct the OpenAI-backed pipeline.
///
/// # Errors
/// `DomainError::Config` when the API key is absent or the policy is invalid. Nothing
/// is contacted before this check.
pub fn build_pipeline(cfg: &AppConfig) -> Result<EventPipeline, DomainError> {
    let api_key = cfg.require_api_key()?;
    let settings = cfg.pipeline_settings()?;
    let api_url = cfg.api_url_or_default();

    let adapter = match cfg.request_timeout() {
        Some(timeout) => OpenAiAdapter::with_timeout(api_url.clone(), api_key, timeout)?,
        None => OpenAiAdapter::new(api_url.clone(), api_key),
    };
    info!(
        model = %settings.model,
        url = %api_url,
        threshold = settings.confidence_threshold,
        "completion adapter configured"
    );

    Ok(EventPipeline::new(
        Arc::new(adapter),
        Arc::new(SystemClock),
        settings,
    ))
}
