//! Page fetching for URL-mode extraction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::extraction::error::ExtractionError;

/// Retrieves the body of a job posting page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Non-2xx answers and transport failures both come back as `FetchFailure`.
    async fn fetch(&self, url: &Url) -> Result<String, ExtractionError>;
}

/// Bytes read from a page before the rest is dropped. Normalization keeps far
/// less than this, so only oversized pages are affected.
pub const MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;

/// Plain GET over reqwest: no auth, no custom headers, bounded by a timeout
/// and by [`MAX_PAGE_BYTES`].
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            max_body_bytes: MAX_PAGE_BYTES,
        })
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, ExtractionError> {
        debug!(url = %url, "Fetching job posting");

        let mut response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Job posting fetch failed");
            ExtractionError::fetch_blocked()
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Job posting returned non-success status");
            return Err(ExtractionError::fetch_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status"),
            ));
        }

        let limit = self.max_body_bytes;
        let capacity = response
            .content_length()
            .map_or(0, |len| usize::try_from(len).unwrap_or(limit).min(limit));
        let mut bytes = Vec::with_capacity(capacity);
        while bytes.len() < limit {
            let chunk = response.chunk().await.map_err(|e| {
                warn!(url = %url, error = %e, "Reading job posting body failed");
                ExtractionError::fetch_blocked()
            })?;
            let Some(chunk) = chunk else { break };
            let take = chunk.len().min(limit - bytes.len());
            bytes.extend_from_slice(&chunk[..take]);
            if take < chunk.len() {
                debug!(url = %url, limit, "Job posting body truncated");
                break;
            }
        }

        // A cut inside a multi-byte character becomes a replacement character.
        let body = String::from_utf8_lossy(&bytes).into_owned();
        debug!(url = %url, bytes = body.len(), "Fetched job posting");
        Ok(body)
    }
}
