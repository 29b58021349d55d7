use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::error::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Extraction(e) => extraction_status(e),
        }
    }
}

fn extraction_status(error: &ExtractionError) -> StatusCode {
    match error {
        ExtractionError::InvalidInput(_)
        | ExtractionError::EmptyContent
        | ExtractionError::NotAJobPosting => StatusCode::BAD_REQUEST,
        // Pass the site's own error status through when it is one.
        ExtractionError::FetchFailure {
            status: Some(code), ..
        } => StatusCode::from_u16(*code)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        ExtractionError::FetchFailure { status: None, .. }
        | ExtractionError::NotConfigured
        | ExtractionError::UpstreamFailure(_)
        | ExtractionError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, message) = match &self {
            AppError::Extraction(e) => {
                if status.is_server_error() {
                    tracing::error!("Extraction error ({}): {e}", e.code());
                }
                (e.code(), e.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ExtractionError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_user_correctable_errors_are_bad_request() {
        assert_eq!(
            status_of(ExtractionError::invalid_input("URL is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ExtractionError::EmptyContent), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ExtractionError::NotAJobPosting), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fetch_status_is_propagated() {
        assert_eq!(
            status_of(ExtractionError::fetch_status(404, "Not Found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ExtractionError::fetch_status(503, "Service Unavailable")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(ExtractionError::fetch_blocked()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_non_error_fetch_status_falls_back_to_500() {
        assert_eq!(
            status_of(ExtractionError::fetch_status(304, "Not Modified")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_llm_side_errors_are_server_errors() {
        for err in [
            ExtractionError::NotConfigured,
            ExtractionError::UpstreamFailure("boom".to_string()),
            ExtractionError::MalformedResponse("eof".to_string()),
        ] {
            assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_body_carries_message_and_code() {
        let response = AppError::from(ExtractionError::NotAJobPosting).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "NOT_A_JOB_POSTING");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Could not extract job details."));
    }
}
