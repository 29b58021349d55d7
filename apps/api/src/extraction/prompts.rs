// Prompt constants for job-posting extraction.
// Both variants share the same response contract; only the source description differs.

use crate::extraction::models::ContentMode;

/// System prompt for extracting job fields from a fetched page.
pub const EXTRACT_FROM_HTML_SYSTEM: &str = "You are a job posting parser. \
    Extract the following information from the job posting HTML: position title, \
    company name, location, job description, requirements, and salary range (if available). \
    Return the information in a structured JSON format with these exact keys: \
    position, company, location, description, requirements, salary_range. \
    If any field cannot be found, return an empty string for that field.";

/// System prompt for extracting job fields from pasted text.
pub const EXTRACT_FROM_TEXT_SYSTEM: &str = "You are a job posting parser. \
    Extract the following information from the job posting text: position title, \
    company name, location, job description, requirements, and salary range (if available). \
    Return the information in a structured JSON format with these exact keys: \
    position, company, location, description, requirements, salary_range. \
    If any field cannot be found, return an empty string for that field.";

pub fn system_prompt_for(mode: ContentMode) -> &'static str {
    match mode {
        ContentMode::Html => EXTRACT_FROM_HTML_SYSTEM,
        ContentMode::Text => EXTRACT_FROM_TEXT_SYSTEM,
    }
}
