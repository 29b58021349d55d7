//! Dashboard statistics over a user's tracked jobs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::tracker::models::JobStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_jobs: usize,
    /// Always carries all five statuses, zero-filled.
    pub jobs_by_status: BTreeMap<JobStatus, usize>,
    /// Share of all jobs in each status, as a percentage.
    pub status_distribution: BTreeMap<JobStatus, f64>,
    pub application_rate: f64,
    pub interview_rate: f64,
    pub offer_rate: f64,
    pub conversion_rates: ConversionRates,
}

/// Stage-to-stage ratios: jobs in the later status per job in the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRates {
    pub saved_to_applied: f64,
    pub applied_to_interview: f64,
    pub interview_to_offer: f64,
    pub offer_to_rejected: f64,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl DashboardStats {
    /// Rates are the share of all jobs currently in that status, as a percentage.
    pub fn compute<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = JobStatus>,
    {
        let mut jobs_by_status: BTreeMap<JobStatus, usize> =
            JobStatus::ALL.iter().map(|s| (*s, 0)).collect();

        let mut total_jobs = 0;
        for status in statuses {
            *jobs_by_status.entry(status).or_default() += 1;
            total_jobs += 1;
        }

        let count = |status: JobStatus| jobs_by_status[&status];
        let rate = |status: JobStatus| percentage(count(status), total_jobs);
        // Zero when nothing sits in the earlier stage.
        let conversion = |from: JobStatus, to: JobStatus| percentage(count(to), count(from));

        let status_distribution = JobStatus::ALL.iter().map(|s| (*s, rate(*s))).collect();
        let conversion_rates = ConversionRates {
            saved_to_applied: conversion(JobStatus::Saved, JobStatus::Applied),
            applied_to_interview: conversion(JobStatus::Applied, JobStatus::Interview),
            interview_to_offer: conversion(JobStatus::Interview, JobStatus::Offer),
            offer_to_rejected: conversion(JobStatus::Offer, JobStatus::Rejected),
        };

        Self {
            total_jobs,
            status_distribution,
            application_rate: rate(JobStatus::Applied),
            interview_rate: rate(JobStatus::Interview),
            offer_rate: rate(JobStatus::Offer),
            conversion_rates,
            jobs_by_status,
        }
    }
}
