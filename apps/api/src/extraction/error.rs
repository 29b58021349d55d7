use thiserror::Error;

/// Classified failure of one extraction call.
///
/// Each failure is assigned exactly one kind where it is detected and returned
/// to the caller unchanged. Messages are shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{message}")]
    FetchFailure { status: Option<u16>, message: String },

    #[error("No content found at the provided URL")]
    EmptyContent,

    #[error("OpenAI API key is not configured")]
    NotConfigured,

    #[error("Failed to process job posting with AI: {0}")]
    UpstreamFailure(String),

    #[error("AI returned an unreadable response: {0}")]
    MalformedResponse(String),

    #[error(
        "Could not extract job details. The content might not be a job posting \
         or might be in an unsupported format."
    )]
    NotAJobPosting,
}

/// Discriminant of [`ExtractionError`], for logging and matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionErrorKind {
    InvalidInput,
    FetchFailure,
    EmptyContent,
    NotConfigured,
    UpstreamFailure,
    MalformedResponse,
    NotAJobPosting,
}

impl ExtractionError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Non-2xx answer from the site being fetched.
    pub fn fetch_status(status: u16, reason: &str) -> Self {
        Self::FetchFailure {
            status: Some(status),
            message: format!("Failed to fetch URL: {reason}"),
        }
    }

    /// Transport-level failure: DNS, TLS, timeout, connection reset.
    pub fn fetch_blocked() -> Self {
        Self::FetchFailure {
            status: None,
            message: "Failed to fetch URL. The website might be blocking automated requests."
                .to_string(),
        }
    }

    pub fn kind(&self) -> ExtractionErrorKind {
        match self {
            Self::InvalidInput(_) => ExtractionErrorKind::InvalidInput,
            Self::FetchFailure { .. } => ExtractionErrorKind::FetchFailure,
            Self::EmptyContent => ExtractionErrorKind::EmptyContent,
            Self::NotConfigured => ExtractionErrorKind::NotConfigured,
            Self::UpstreamFailure(_) => ExtractionErrorKind::UpstreamFailure,
            Self::MalformedResponse(_) => ExtractionErrorKind::MalformedResponse,
            Self::NotAJobPosting => ExtractionErrorKind::NotAJobPosting,
        }
    }

    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ExtractionErrorKind::InvalidInput => "INVALID_INPUT",
            ExtractionErrorKind::FetchFailure => "FETCH_FAILURE",
            ExtractionErrorKind::EmptyContent => "EMPTY_CONTENT",
            ExtractionErrorKind::NotConfigured => "NOT_CONFIGURED",
            ExtractionErrorKind::UpstreamFailure => "UPSTREAM_FAILURE",
            ExtractionErrorKind::MalformedResponse => "MALFORMED_RESPONSE",
            ExtractionErrorKind::NotAJobPosting => "NOT_A_JOB_POSTING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_carries_code_and_reason() {
        let err = ExtractionError::fetch_status(404, "Not Found");
        assert_eq!(err.kind(), ExtractionErrorKind::FetchFailure);
        assert_eq!(
            err,
            ExtractionError::FetchFailure {
                status: Some(404),
                message: "Failed to fetch URL: Not Found".to_string(),
            }
        );
    }

    #[test]
    fn test_blocked_fetch_has_no_status() {
        match ExtractionError::fetch_blocked() {
            ExtractionError::FetchFailure { status, message } => {
                assert_eq!(status, None);
                assert!(message.contains("blocking automated requests"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_upstream_message_is_surfaced() {
        let err = ExtractionError::UpstreamFailure("Rate limit reached".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to process job posting with AI: Rate limit reached"
        );
        assert_eq!(err.code(), "UPSTREAM_FAILURE");
    }
}
