use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::tracker::models::JobStatus;
use crate::tracker::stats::DashboardStats;
use crate::tracker::timeline::StatusTimeline;

#[derive(Debug, Deserialize)]
pub struct JobSummary {
    pub status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub struct DashboardStatsRequest {
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub status: JobStatus,
}

/// POST /api/v1/dashboard/stats
pub async fn handle_dashboard_stats(
    Json(request): Json<DashboardStatsRequest>,
) -> Json<DashboardStats> {
    Json(DashboardStats::compute(
        request.jobs.into_iter().map(|job| job.status),
    ))
}

/// GET /api/v1/jobs/timeline?status=interview
pub async fn handle_status_timeline(Query(query): Query<TimelineQuery>) -> Json<StatusTimeline> {
    Json(StatusTimeline::for_status(query.status))
}
