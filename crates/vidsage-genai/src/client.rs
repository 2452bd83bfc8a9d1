//! HTTP client and configuration for the generative media service.

use std::time::Duration;

use reqwest::Client;

use crate::error::{GenAiError, GenAiResult};

const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Configuration for the GenAI client.
///
/// The credential is injected here once, at startup; pipeline components
/// never read environment state themselves.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Service API key
    pub api_key: String,
    /// Base URL of the service
    pub base_url: String,
    /// Model identifier used for generation
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            timeout: Duration::from_secs(300), // generation over video can be slow
        }
    }

    /// Create config from environment variables.
    ///
    /// A missing API key is a startup-time fatal condition, surfaced before
    /// any pipeline work begins.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| GenAiError::MissingCredential(API_KEY_VAR))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("GENAI_MODEL") {
            config.model = model;
        }
        if let Some(timeout) = std::env::var("GENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(timeout);
        }
        Ok(config)
    }
}

/// Client for the generative media service.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    pub(crate) http: Client,
    pub(crate) config: GenAiConfig,
}

impl GenAiClient {
    /// Create a new client.
    pub fn new(config: GenAiConfig) -> GenAiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GenAiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> GenAiResult<Self> {
        Self::new(GenAiConfig::from_env()?)
    }

    /// Model identifier this client generates with.
    pub fn model(&self) -> &str {
        &self.config.model
    }
}
