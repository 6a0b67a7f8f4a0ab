//! OpenAI-compatible chat completions client
//!
//! One blocking-in-spirit request per call: the caller awaits the reply
//! before doing anything else. No retries and no request timeout.

use crate::config::AnalysisConfig;
use crate::error::ClientError;
use crate::{AnalysisClient, AnalysisRequest, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chat message as sent on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Wrap a single prompt as one user-role message
    pub fn from_analysis(request: &AnalysisRequest) -> Self {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a raw response body
pub fn extract_reply(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ClientError::EmptyReply)
}

/// OpenAI chat completions client
pub struct OpenAiClient {
    config: AnalysisConfig,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client bound to `config`
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("caselens-analysis-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(OpenAiClient {
            config,
            http_client,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AnalysisClient for OpenAiClient {
    fn request_for(&self, prompt: &str) -> AnalysisRequest {
        AnalysisRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.config.max_tokens,
        }
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        let body = ChatCompletionRequest::from_analysis(request);
        debug!(prompt_len = request.prompt.len(), "sending chat completion");

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply = extract_reply(&text)?;
        debug!(reply_len = reply.len(), "received chat completion");
        Ok(reply)
    }
}
