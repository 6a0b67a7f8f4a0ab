//! In-memory fake of the analysis capability (testing only)
//!
//! `ScriptedClient` answers from a queue of scripted outcomes and records
//! every request it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::error::ClientError;
use crate::{AnalysisClient, AnalysisRequest, Result};

enum Scripted {
    Reply(String),
    Fail(String),
}

/// Scripted analysis client.
///
/// Queued outcomes are consumed in order; once the queue is empty the
/// fallback reply is returned. Requests carry the default model and reply
/// length unless overridden.
pub struct ScriptedClient {
    queue: Mutex<VecDeque<Scripted>>,
    fallback: String,
    model: String,
    max_tokens: u32,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl Default for ScriptedClient {
    fn default() -> Self {
        ScriptedClient {
            queue: Mutex::new(VecDeque::new()),
            fallback: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client that always answers with `reply`
    pub fn always(reply: &str) -> Self {
        ScriptedClient {
            fallback: reply.to_string(),
            ..Self::default()
        }
    }

    /// Model stamped on requests built by this client
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Reply length stamped on requests built by this client
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Queue a successful reply
    pub fn then_reply(self, reply: &str) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(reply.to_string()));
        self
    }

    /// Queue a failure, surfaced as an HTTP error
    pub fn then_fail(self, message: &str) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisClient for ScriptedClient {
    fn request_for(&self, prompt: &str) -> AnalysisRequest {
        AnalysisRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
        }
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(message)) => Err(ClientError::Http(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
