use chrono::{DateTime, Utc};

use super::deadline::{parse_deadline, ParsedDeadline};
use crate::job_store::Job;

/// A job is active until the day after its deadline.
/// Deadlines we can't parse keep the job listed.
pub fn is_active(job: &Job, now: DateTime<Utc>) -> bool {
    match parse_deadline(&job.deadline) {
        ParsedDeadline::Date(deadline) => deadline >= now.date_naive(),
        ParsedDeadline::Unparseable => true,
    }
}

pub fn retain_active(jobs: Vec<Job>, now: DateTime<Utc>) -> Vec<Job> {
    jobs.into_iter().filter(|job| is_active(job, now)).collect()
}
