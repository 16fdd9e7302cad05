//! Test data for end-to-end tests
//!
//! Deadlines are computed from the current date so the deadline buckets
//! keep matching the same jobs whenever the suite runs.

use super::constants::*;
use chrono::{Duration, Utc};
use govjobs_server::job_store::{JobStatus, NewJob};
use serde_json::{json, Value};

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn fixture_job(
    title: &str,
    department: &str,
    location: &str,
    deadline: String,
    description: &str,
) -> NewJob {
    let slug = title.to_lowercase().replace(' ', "-");
    NewJob {
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        qualification: "Graduate degree in any discipline".to_string(),
        deadline,
        apply_link: format!("https://jobs.example.gov.in/{}", slug),
        posted_on: "2 days ago".to_string(),
        source_url: "https://jobs.example.gov.in".to_string(),
        description: Some(description.to_string()),
        status: Some(JobStatus::Active),
    }
}

/// The jobs every TestServer starts with, in insertion order.
pub fn fixture_jobs() -> Vec<NewJob> {
    let jobs = vec![
        fixture_job(
            TAX_OFFICER_TITLE,
            "Central Board of Direct Taxes",
            "Bangalore, Karnataka",
            days_from_now(3),
            "Assess and collect direct taxes.",
        ),
        fixture_job(
            MEDICAL_OFFICER_TITLE,
            RAILWAYS_DEPARTMENT,
            "Kolkata, West Bengal",
            days_from_now(20),
            "Provide medical care to railway employees and their families.",
        ),
        fixture_job(
            ENGINEER_TITLE,
            "Public Works Department",
            "Mumbai, Maharashtra",
            days_from_now(40),
            "Supervise road and bridge construction projects.",
        ),
        fixture_job(
            EXPIRED_TITLE,
            RAILWAYS_DEPARTMENT,
            "Chennai, Tamil Nadu",
            "2000-01-01".to_string(),
            "Issue tickets at suburban stations.",
        ),
        fixture_job(
            UNDATED_TITLE,
            "National Archives of India",
            "New Delhi, Delhi",
            "Rolling applications".to_string(),
            "Catalogue and preserve historical records.",
        ),
    ];
    debug_assert_eq!(jobs.len(), FIXTURE_JOBS_COUNT);
    jobs
}

/// A valid creation body not present in the fixtures.
pub fn new_job_body() -> Value {
    json!({
        "title": "Forest Range Officer",
        "department": "Ministry of Environment",
        "location": "Dehradun, Uttarakhand",
        "qualification": "B.Sc. Forestry",
        "deadline": days_from_now(60),
        "applyLink": "https://moef.gov.in/jobs/fro",
        "postedOn": "Today",
        "sourceUrl": "https://moef.gov.in"
    })
}
