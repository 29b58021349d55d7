pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;
use crate::tracker::handlers::{handle_dashboard_stats, handle_status_timeline};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route("/api/v1/extract-job", post(handlers::handle_extract_from_url))
        .route(
            "/api/v1/extract-job/text",
            post(handlers::handle_extract_from_text),
        )
        // Tracker API
        .route("/api/v1/dashboard/stats", post(handle_dashboard_stats))
        .route("/api/v1/jobs/timeline", get(handle_status_timeline))
        .with_state(state)
}
