//! Extraction Client — one model call per extraction, fixed prompt contract.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::extraction::error::ExtractionError;
use crate::extraction::models::ContentMode;
use crate::extraction::prompts::system_prompt_for;
use crate::llm_client::{CompletionBackend, LlmError};

/// Sends normalized content to the injected completion backend.
#[derive(Clone)]
pub struct ExtractionClient {
    backend: Arc<dyn CompletionBackend>,
}

impl ExtractionClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_configured()
    }

    /// Returns the model's raw JSON payload. Single attempt, no retry.
    ///
    /// A blank answer is read as `{}`, which the validator then rejects as
    /// not a job posting.
    pub async fn extract(&self, content: &str, mode: ContentMode) -> Result<String, ExtractionError> {
        debug!(chars = content.chars().count(), ?mode, "Requesting job field extraction");

        let raw = self
            .backend
            .complete_json(system_prompt_for(mode), content)
            .await
            .map_err(|e| {
                warn!(error = %e, "Extraction LLM call failed");
                classify(e)
            })?;

        if raw.trim().is_empty() {
            debug!("Model returned blank content");
            return Ok("{}".to_string());
        }
        Ok(raw)
    }
}

fn classify(error: LlmError) -> ExtractionError {
    match error {
        LlmError::NotConfigured => ExtractionError::NotConfigured,
        LlmError::Api { message, .. } => ExtractionError::UpstreamFailure(message),
        other => ExtractionError::UpstreamFailure(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::prompts::{EXTRACT_FROM_HTML_SYSTEM, EXTRACT_FROM_TEXT_SYSTEM};
    use crate::extraction::testing::FakeCompletion;

    #[tokio::test]
    async fn test_passes_content_and_mode_prompt() {
        let fake = Arc::new(FakeCompletion::replying(r#"{"company":"Acme"}"#));
        let client = ExtractionClient::new(fake.clone());

        let raw = client.extract("<h1>Engineer</h1>", ContentMode::Html).await.unwrap();
        assert_eq!(raw, r#"{"company":"Acme"}"#);

        client.extract("Engineer at Acme", ContentMode::Text).await.unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].system, EXTRACT_FROM_HTML_SYSTEM);
        assert_eq!(calls[0].prompt, "<h1>Engineer</h1>");
        assert_eq!(calls[1].system, EXTRACT_FROM_TEXT_SYSTEM);
    }

    #[tokio::test]
    async fn test_rate_limit_is_upstream_failure_with_message() {
        let fake = Arc::new(FakeCompletion::failing(|| LlmError::Api {
            status: 429,
            message: "Rate limit reached for requests".to_string(),
        }));
        let err = ExtractionClient::new(fake)
            .extract("content", ContentMode::Text)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UpstreamFailure("Rate limit reached for requests".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let fake = Arc::new(FakeCompletion::failing(|| LlmError::NotConfigured));
        let err = ExtractionClient::new(fake)
            .extract("content", ContentMode::Text)
            .await
            .unwrap_err();
        assert_eq!(err, ExtractionError::NotConfigured);
    }

    #[tokio::test]
    async fn test_no_choices_is_upstream_failure() {
        let fake = Arc::new(FakeCompletion::failing(|| LlmError::NoChoices));
        let err = ExtractionClient::new(fake)
            .extract("content", ContentMode::Text)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UpstreamFailure("LLM returned no choices".to_string())
        );
    }

    #[tokio::test]
    async fn test_blank_model_answer_reads_as_empty_object() {
        for blank in ["", "  \n"] {
            let fake = Arc::new(FakeCompletion::replying(blank));
            let raw = ExtractionClient::new(fake)
                .extract("content", ContentMode::Text)
                .await
                .unwrap();
            assert_eq!(raw, "{}");
        }
    }
}
