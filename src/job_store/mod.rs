mod memory_store;
pub mod models;
pub mod seed;
mod trait_def;

pub use memory_store::InMemoryJobStore;
pub use models::{Job, JobStatus, JobUpdate, NewJob};
pub use trait_def::JobStore;

#[cfg(test)]
pub(crate) fn test_job(id: &str, deadline: &str) -> Job {
    Job {
        id: id.to_string(),
        title: format!("Job {id}"),
        department: "Department".to_string(),
        location: "Location".to_string(),
        qualification: "Qualification".to_string(),
        deadline: deadline.to_string(),
        apply_link: format!("https://example.gov/job/{id}"),
        posted_on: "Today".to_string(),
        source_url: "https://example.gov".to_string(),
        description: None,
        status: None,
        created_at: chrono::Utc::now(),
    }
}
