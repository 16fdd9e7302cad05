use super::models::{Job, JobUpdate, NewJob};
use crate::search::JobFilters;

pub trait JobStore: Send + Sync {
    /// Stores a new job with a fresh id and creation time, and returns it.
    fn create_job(&self, new_job: NewJob) -> Job;

    /// Returns the job with the given id, expired or not.
    /// Returns None if the job does not exist.
    fn get_job(&self, id: &str) -> Option<Job>;

    /// Returns all jobs whose deadline has not passed, in insertion order.
    fn get_all_jobs(&self) -> Vec<Job>;

    /// Returns the active jobs matching the query and filters, in insertion order.
    fn search_jobs(&self, query: &str, filters: &JobFilters) -> Vec<Job>;

    /// Merges the supplied fields onto an existing job.
    /// Returns None if the job does not exist.
    fn update_job(&self, id: &str, update: JobUpdate) -> Option<Job>;

    /// Removes a job, returning whether it existed.
    fn delete_job(&self, id: &str) -> bool;

    /// Number of stored jobs, including expired ones.
    fn jobs_count(&self) -> usize;
}
