//! Analysis-Client: external language-model analysis for caselens
//!
//! This crate owns the only network boundary in caselens. It submits a
//! single user-role prompt to an OpenAI-compatible chat completions
//! endpoint and hands back the free-text reply.
//!
//! ## Key Components
//!
//! - `AnalysisConfig`: credential, endpoint and model, loaded from the environment
//! - `AnalysisClient`: the seam the case processor depends on
//! - `OpenAiClient`: `reqwest`-backed implementation
//! - `fakes::ScriptedClient`: in-memory implementation for tests

mod config;
mod error;
pub mod fakes;
mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use config::{AnalysisConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use error::ClientError;
pub use openai::{extract_reply, ChatCompletionRequest, ChatMessage, OpenAiClient};

/// Result type for analysis-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// One analysis call: model, full prompt text and requested reply length
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// External natural-language analysis capability.
///
/// Implementations return the reply text verbatim; interpreting it is the
/// caller's business.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Wrap `prompt` with this client's model and requested reply length.
    fn request_for(&self, prompt: &str) -> AnalysisRequest;

    /// Submit one request and wait for the reply text.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String>;
}
