//! Axum route handlers for job-posting extraction.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::extraction::error::ExtractionError;
use crate::extraction::models::{ExtractedJobFields, ExtractionRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

// Fields are loose JSON values so a missing or wrongly typed value is reported
// as a 400 with an error body rather than a 422 from the JSON extractor.

#[derive(Debug, Deserialize)]
pub struct ExtractFromUrlRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractFromTextRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Missing or `null` reads as empty; any non-string is rejected with `invalid`.
fn string_field(value: Option<Value>, invalid: &str) -> Result<String, ExtractionError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ExtractionError::invalid_input(invalid)),
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ExtractionError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| ExtractionError::invalid_input(rejection.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/extract-job
///
/// Fetches the posting at `url` and returns the six extracted job fields.
pub async fn handle_extract_from_url(
    State(state): State<AppState>,
    payload: Result<Json<ExtractFromUrlRequest>, JsonRejection>,
) -> Result<Json<ExtractedJobFields>, AppError> {
    let url = string_field(body(payload)?.url, "Invalid URL format")?;
    let request = ExtractionRequest::Url(url);
    let fields = state.extraction.extract(&request).await?;
    Ok(Json(fields))
}

/// POST /api/v1/extract-job/text
///
/// Extracts the six job fields from pasted posting text.
pub async fn handle_extract_from_text(
    State(state): State<AppState>,
    payload: Result<Json<ExtractFromTextRequest>, JsonRejection>,
) -> Result<Json<ExtractedJobFields>, AppError> {
    let text = string_field(body(payload)?.text, "Text must be a string")?;
    let request = ExtractionRequest::Text(text);
    let fields = state.extraction.extract(&request).await?;
    Ok(Json(fields))
}
