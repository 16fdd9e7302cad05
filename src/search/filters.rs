//! Free-text and discrete filters over job listings.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use super::deadline::parse_deadline;
use crate::job_store::Job;

/// Filter value meaning "no constraint".
pub const ALL: &str = "all";

/// Named cumulative deadline windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineBucket {
    ThisWeek,
    ThisMonth,
    /// Unknown bucket names keep every job.
    Any,
}

impl DeadlineBucket {
    pub fn from_label(label: &str) -> DeadlineBucket {
        match label {
            "This Week" => DeadlineBucket::ThisWeek,
            "This Month" => DeadlineBucket::ThisMonth,
            _ => DeadlineBucket::Any,
        }
    }

    fn window(&self) -> Option<Duration> {
        match self {
            DeadlineBucket::ThisWeek => Some(Duration::days(7)),
            DeadlineBucket::ThisMonth => Some(Duration::days(30)),
            DeadlineBucket::Any => None,
        }
    }

    /// True if `job`'s deadline falls on or before `now` plus the bucket window.
    /// A deadline that can't be parsed never falls in a bounded window.
    pub fn contains(&self, job: &Job, now: DateTime<Utc>) -> bool {
        let Some(window) = self.window() else {
            return true;
        };
        match parse_deadline(&job.deadline).instant() {
            Some(deadline) => deadline <= now + window,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobFilters {
    pub location: Option<String>,
    pub department: Option<String>,
    pub deadline: Option<String>,
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != ALL)
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        constraint(&self.location).is_none()
            && constraint(&self.department).is_none()
            && constraint(&self.deadline).is_none()
    }

    pub fn matches(&self, job: &Job, now: DateTime<Utc>) -> bool {
        if let Some(location) = constraint(&self.location) {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        // Department is an exact, case-sensitive match, unlike location.
        if let Some(department) = constraint(&self.department) {
            if job.department != department {
                return false;
            }
        }

        if let Some(bucket) = constraint(&self.deadline) {
            if !DeadlineBucket::from_label(bucket).contains(job, now) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring match against title, department, location and description.
pub fn matches_query(job: &Job, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let haystacks = [
        Some(job.title.as_str()),
        Some(job.department.as_str()),
        Some(job.location.as_str()),
        job.description.as_deref(),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the jobs matching both the query and the filters, preserving input order.
pub fn filter_jobs(
    jobs: Vec<Job>,
    query: &str,
    filters: &JobFilters,
    now: DateTime<Utc>,
) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| matches_query(job, query) && filters.matches(job, now))
        .collect()
}
