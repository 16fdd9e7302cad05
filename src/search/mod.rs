pub mod deadline;
pub mod expiration;
pub mod filters;

pub use deadline::{parse_deadline, ParsedDeadline};
pub use expiration::{is_active, retain_active};
pub use filters::{filter_jobs, matches_query, DeadlineBucket, JobFilters};

use crate::job_store::Job;
use chrono::{DateTime, Utc};

/// Drops expired jobs, then applies the query and filters.
pub fn search_active(
    jobs: Vec<Job>,
    query: &str,
    filters: &JobFilters,
    now: DateTime<Utc>,
) -> Vec<Job> {
    filter_jobs(retain_active(jobs, now), query, filters, now)
}
