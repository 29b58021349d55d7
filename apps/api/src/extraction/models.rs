use serde::{Deserialize, Serialize};

/// Minimum length (in characters) of pasted text before it is worth an LLM call.
pub const MIN_TEXT_LENGTH: usize = 50;

/// Character budget for content sent to the model.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 8000;

/// Appended whenever the normalizer had to cut content.
pub const TRUNCATION_MARKER: &str = "...";

/// How raw content should be cleaned before extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Fetched page markup: scripts, styles and comments are stripped.
    Html,
    /// Text pasted by the user: whitespace only.
    Text,
}

/// A single extraction call, by source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRequest {
    Url(String),
    Text(String),
}

/// The six job fields the model is asked for.
///
/// Every field is always present; anything the source did not mention is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedJobFields {
    pub position: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub salary_range: String,
}

impl ExtractedJobFields {
    /// Wire names of the fields, in prompt order.
    pub const FIELD_NAMES: [&'static str; 6] = [
        "position",
        "company",
        "location",
        "description",
        "requirements",
        "salary_range",
    ];

    /// A result only counts as a job posting when it names a position or a company.
    pub fn is_job_posting(&self) -> bool {
        !self.position.trim().is_empty() || !self.company.trim().is_empty()
    }
}
