//! Status timeline: which steps a job has passed and how far along it is.

use serde::Serialize;

use crate::tracker::models::JobStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub status: JobStatus,
    pub label: &'static str,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTimeline {
    pub current: JobStatus,
    /// Percentage of the bar to fill.
    pub progress: f64,
    pub steps: Vec<TimelineStep>,
}

impl StatusTimeline {
    pub fn for_status(current: JobStatus) -> Self {
        Self {
            current,
            progress: current.timeline_progress(),
            steps: JobStatus::ALL
                .iter()
                .map(|step| TimelineStep {
                    status: *step,
                    label: step.label(),
                    reached: current.has_reached(*step),
                })
                .collect(),
        }
    }
}
