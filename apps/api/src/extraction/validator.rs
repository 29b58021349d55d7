//! Response Validator — turns the model's JSON payload into `ExtractedJobFields`.

use serde_json::{Map, Value};
use tracing::debug;

use crate::extraction::error::ExtractionError;
use crate::extraction::models::ExtractedJobFields;
use crate::llm_client::strip_json_fences;

/// Parses `raw` and enforces the position-or-company rule.
///
/// Missing keys and `null` become `""`; scalars are rendered as text and
/// lists of scalars are joined one item per line.
pub fn validate(raw: &str) -> Result<ExtractedJobFields, ExtractionError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))
        .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))?;

    let object = value.as_object().ok_or_else(|| {
        ExtractionError::MalformedResponse("expected a JSON object".to_string())
    })?;

    let extra: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|k| !ExtractedJobFields::FIELD_NAMES.iter().any(|name| *name == *k))
        .collect();
    if !extra.is_empty() {
        debug!(?extra, "Ignoring unexpected keys in extraction response");
    }

    let fields = ExtractedJobFields {
        position: field(object, "position")?,
        company: field(object, "company")?,
        location: field(object, "location")?,
        description: field(object, "description")?,
        requirements: field(object, "requirements")?,
        salary_range: field(object, "salary_range")?,
    };

    if !fields.is_job_posting() {
        return Err(ExtractionError::NotAJobPosting);
    }

    Ok(fields)
}

fn field(object: &Map<String, Value>, key: &str) -> Result<String, ExtractionError> {
    let not_text = || ExtractionError::MalformedResponse(format!("field '{key}' is not text"));

    match object.get(key) {
        None => Ok(String::new()),
        Some(Value::Array(items)) => {
            let lines = items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(not_text))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lines
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Some(value) => scalar_text(value).ok_or_else(not_text),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
