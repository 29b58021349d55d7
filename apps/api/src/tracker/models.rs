use serde::{Deserialize, Serialize};

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Saved,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Timeline order, left to right.
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Saved,
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Saved => "Saved",
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Fill of the status timeline bar, 0–100.
    pub fn timeline_progress(self) -> f64 {
        self.position() as f64 / (Self::ALL.len() - 1) as f64 * 100.0
    }

    /// A timeline step is lit once the job has reached or passed it.
    pub fn has_reached(self, step: JobStatus) -> bool {
        self.position() >= step.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&JobStatus::Interview).unwrap();
        assert_eq!(json, r#""interview""#);
        let status: JobStatus = serde_json::from_str(r#""offer""#).unwrap();
        assert_eq!(status, JobStatus::Offer);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<JobStatus>(r#""ghosted""#).is_err());
    }

    #[test]
    fn test_timeline_progress_steps() {
        let progress: Vec<f64> = JobStatus::ALL.iter().map(|s| s.timeline_progress()).collect();
        assert_eq!(progress, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_has_reached_earlier_steps() {
        assert!(JobStatus::Interview.has_reached(JobStatus::Saved));
        assert!(JobStatus::Interview.has_reached(JobStatus::Interview));
        assert!(!JobStatus::Interview.has_reached(JobStatus::Offer));
    }
}
