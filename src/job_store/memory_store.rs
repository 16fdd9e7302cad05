//! In-memory job store.
//!
//! Jobs live in a map keyed by id, with a separate id list keeping insertion
//! order for listings. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::models::{Job, JobUpdate, NewJob};
use super::trait_def::JobStore;
use crate::search::{self, JobFilters};

#[derive(Default)]
struct Jobs {
    by_id: HashMap<String, Job>,
    order: Vec<String>,
}

impl Jobs {
    fn snapshot(&self) -> Vec<Job> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Jobs>,
}

impl InMemoryJobStore {
    pub fn new() -> InMemoryJobStore {
        InMemoryJobStore::default()
    }

    /// Creates a store pre-populated with the given jobs, in order.
    pub fn with_jobs(jobs: Vec<NewJob>) -> InMemoryJobStore {
        let store = InMemoryJobStore::new();
        for job in jobs {
            store.create_job(job);
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, Jobs> {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Jobs> {
        self.jobs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JobStore for InMemoryJobStore {
    fn create_job(&self, new_job: NewJob) -> Job {
        let job = Job {
            id: Uuid::new_v4().to_string(),
            title: new_job.title,
            department: new_job.department,
            location: new_job.location,
            qualification: new_job.qualification,
            deadline: new_job.deadline,
            apply_link: new_job.apply_link,
            posted_on: new_job.posted_on,
            source_url: new_job.source_url,
            description: new_job.description.filter(|d| !d.is_empty()),
            status: new_job.status,
            created_at: Utc::now(),
        };

        let mut jobs = self.write();
        jobs.order.push(job.id.clone());
        jobs.by_id.insert(job.id.clone(), job.clone());
        debug!("Created job {} ({})", job.id, job.title);
        job
    }

    fn get_job(&self, id: &str) -> Option<Job> {
        self.read().by_id.get(id).cloned()
    }

    fn get_all_jobs(&self) -> Vec<Job> {
        let jobs = self.read().snapshot();
        search::retain_active(jobs, Utc::now())
    }

    fn search_jobs(&self, query: &str, filters: &JobFilters) -> Vec<Job> {
        let jobs = self.read().snapshot();
        search::search_active(jobs, query, filters, Utc::now())
    }

    fn update_job(&self, id: &str, update: JobUpdate) -> Option<Job> {
        let mut jobs = self.write();
        let job = jobs.by_id.get_mut(id)?;
        update.apply_to(job);
        debug!("Updated job {}", id);
        Some(job.clone())
    }

    fn delete_job(&self, id: &str) -> bool {
        let mut jobs = self.write();
        if jobs.by_id.remove(id).is_none() {
            return false;
        }
        jobs.order.retain(|existing| existing != id);
        debug!("Deleted job {}", id);
        true
    }

    fn jobs_count(&self) -> usize {
        self.read().by_id.len()
    }
}
