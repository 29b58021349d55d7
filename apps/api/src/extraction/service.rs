//! Extraction Service — orchestrates one extraction call.
//!
//! Flow: validate input → [fetch page] → normalize → LLM extract → validate
//! response. Linear, single attempt, the first error is returned as-is.

use std::sync::Arc;

use reqwest::Url;
use tracing::{info, warn};

use crate::extraction::client::ExtractionClient;
use crate::extraction::error::ExtractionError;
use crate::extraction::fetcher::PageFetcher;
use crate::extraction::models::{
    ContentMode, ExtractedJobFields, ExtractionRequest, MIN_TEXT_LENGTH,
};
use crate::extraction::normalizer::normalize;
use crate::extraction::validator::validate;

#[derive(Clone)]
pub struct ExtractionService {
    fetcher: Arc<dyn PageFetcher>,
    client: ExtractionClient,
    max_content_length: usize,
}

impl ExtractionService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        client: ExtractionClient,
        max_content_length: usize,
    ) -> Self {
        Self {
            fetcher,
            client,
            max_content_length,
        }
    }

    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractedJobFields, ExtractionError> {
        match request {
            ExtractionRequest::Url(url) => self.extract_from_url(url).await,
            ExtractionRequest::Text(text) => self.extract_from_text(text).await,
        }
    }

    pub async fn extract_from_url(&self, url: &str) -> Result<ExtractedJobFields, ExtractionError> {
        let url = parse_job_url(url)?;
        self.ensure_configured()?;

        let html = self.fetcher.fetch(&url).await?;
        if html.trim().is_empty() {
            warn!(url = %url, "Fetched job posting has no content");
            return Err(ExtractionError::EmptyContent);
        }

        let content = normalize(&html, ContentMode::Html, self.max_content_length);
        let fields = self.run_model(&content, ContentMode::Html).await?;

        info!(url = %url, position = %fields.position, company = %fields.company, "Extracted job from URL");
        Ok(fields)
    }

    pub async fn extract_from_text(&self, text: &str) -> Result<ExtractedJobFields, ExtractionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::invalid_input("Text is required"));
        }
        if text.chars().count() < MIN_TEXT_LENGTH {
            return Err(ExtractionError::invalid_input(
                "Text is too short to be a job posting. Please provide more content.",
            ));
        }
        self.ensure_configured()?;

        let content = normalize(text, ContentMode::Text, self.max_content_length);
        let fields = self.run_model(&content, ContentMode::Text).await?;

        info!(position = %fields.position, company = %fields.company, "Extracted job from text");
        Ok(fields)
    }

    fn ensure_configured(&self) -> Result<(), ExtractionError> {
        if self.client.is_configured() {
            Ok(())
        } else {
            warn!("Extraction requested but no LLM API key is configured");
            Err(ExtractionError::NotConfigured)
        }
    }

    async fn run_model(
        &self,
        content: &str,
        mode: ContentMode,
    ) -> Result<ExtractedJobFields, ExtractionError> {
        let raw = self.client.extract(content, mode).await?;
        validate(&raw).inspect_err(|e| warn!(error = %e, "Rejected extraction response"))
    }
}

/// Accepts only absolute http(s) URLs with a host.
fn parse_job_url(url: &str) -> Result<Url, ExtractionError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ExtractionError::invalid_input("URL is required"));
    }

    let parsed = Url::parse(url).map_err(|_| ExtractionError::invalid_input("Invalid URL format"))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ExtractionError::invalid_input("Invalid URL format"));
    }
    Ok(parsed)
}
