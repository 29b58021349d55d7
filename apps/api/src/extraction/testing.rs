//! Fakes for the two network seams, so pipeline tests never leave the process.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;

use crate::extraction::error::ExtractionError;
use crate::extraction::fetcher::PageFetcher;
use crate::llm_client::{CompletionBackend, LlmError};

/// One recorded call to [`FakeCompletion`].
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub system: String,
    pub prompt: String,
}

enum Reply {
    Text(String),
    Error(Box<dyn Fn() -> LlmError + Send + Sync>),
}

/// Completion backend with a canned answer.
pub struct FakeCompletion {
    configured: bool,
    reply: Reply,
    calls: Mutex<Vec<RecordedCompletion>>,
}

impl FakeCompletion {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            configured: true,
            reply: Reply::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            configured: true,
            reply: Reply::Error(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a client started without an API key.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            reply: Reply::Error(Box::new(|| LlmError::NotConfigured)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCompletion> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for FakeCompletion {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete_json(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCompletion {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Error(make) => Err(make()),
        }
    }
}

/// Page fetcher with a canned outcome.
pub struct FakeFetcher {
    outcome: Result<String, ExtractionError>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving(body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ExtractionError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, ExtractionError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcome.clone()
    }
}
