use crate::config::Config;
use crate::extraction::service::ExtractionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub extraction: ExtractionService,
    pub config: Config,
}
