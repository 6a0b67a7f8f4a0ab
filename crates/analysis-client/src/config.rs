//! Analysis client configuration
//!
//! The credential is read from the process environment, after a local
//! `.env` file (if any) has been merged into it.

use crate::error::ClientError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default requested maximum reply length, in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 400;

/// Analysis client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bearer credential
    pub api_key: String,
    /// Base URL, without the trailing `/chat/completions`
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Requested maximum reply length
    pub max_tokens: u32,
}

impl AnalysisConfig {
    /// Create config for a specific credential with default endpoint and model
    pub fn new(api_key: &str) -> Self {
        AnalysisConfig {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Load `.env` (when present) and build the config from the environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_BASE_URL` and `OPENAI_MODEL`.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let mut config = Self::new(&api_key);
        if let Some(base_url) = lookup("OPENAI_BASE_URL").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL").filter(|v| !v.is_empty()) {
            config.model = model;
        }
        Ok(config)
    }

    /// Override the model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the endpoint base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the requested maximum reply length
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
