//! Application configuration. API credential, endpoint, model and pipeline policy.

use crate::domain::{DEFAULT_CONFIDENCE_THRESHOLD, DomainError};
use crate::usecases::PipelineSettings;
use serde::Deserialize;
use std::time::Duration;

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini-2024-07-18";

/// Name the confirmation message is signed with.
pub const DEFAULT_SIGNATURE: &str = "Susie";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Completion API key. Read from OPENAI_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Completion API URL. Defaults to OpenAI. Read from EVENT_ASSIST_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Read from EVENT_ASSIST_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Inclusive minimum extraction confidence. Read from EVENT_ASSIST_CONFIDENCE_THRESHOLD.
    #[serde(default)]
    pub confidence_threshold: Option<f64>,

    /// Sign-off used in confirmations. Read from EVENT_ASSIST_SIGNATURE.
    #[serde(default)]
    pub signature: Option<String>,

    /// Optional HTTP timeout for each completion call. Read from EVENT_ASSIST_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("EVENT_ASSIST").try_parsing(true));
        if let Ok(path) = std::env::var("EVENT_ASSIST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // The credential keeps its conventional name, no EVENT_ASSIST_ prefix
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            cfg.api_key = Some(key);
        }
        Ok(cfg)
    }

    /// Returns the API key, or a configuration error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<String, DomainError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(DomainError::Config(format!(
                "Please set {} in your environment (or .env)",
                API_KEY_ENV
            ))),
        }
    }

    /// Returns the API URL. Defaults to OpenAI chat completions endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn signature_or_default(&self) -> String {
        self.signature
            .clone()
            .unwrap_or_else(|| DEFAULT_SIGNATURE.to_string())
    }

    /// Returns the confidence threshold. Defaults to 0.7.
    pub fn confidence_threshold_or_default(&self) -> f64 {
        self.confidence_threshold
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Pipeline policy derived from this config.
    ///
    /// # Errors
    /// `DomainError::Config` if the threshold is outside [0, 1].
    pub fn pipeline_settings(&self) -> Result<PipelineSettings, DomainError> {
        let threshold = self.confidence_threshold_or_default();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(DomainError::Config(format!(
                "confidence_threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(PipelineSettings {
            model: self.model_or_default(),
            confidence_threshold: threshold,
            signature: self.signature_or_default(),
        })
    }
}
