//! Job sources and the scraper that feeds their listings into the store.

mod mock_site;
mod periodic;

pub use mock_site::{ListingFields, MockSiteSource, SiteLayout, OPM_LAYOUT, USAJOBS_LAYOUT};
pub use periodic::spawn_periodic_scrape;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::job_store::{Job, JobStore, NewJob};
use crate::server::metrics;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid listing pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Source {source_name} failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },
}

/// Something that can produce job listings, e.g. a job board adapter.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<NewJob>, ScrapeError>;
}

pub struct Scraper {
    sources: Vec<Arc<dyn JobSource>>,
}

impl Scraper {
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Scraper {
        Scraper { sources }
    }

    /// Scraper over the built-in mock government job boards.
    pub fn with_mock_sites() -> Result<Scraper, ScrapeError> {
        Ok(Scraper::new(vec![
            Arc::new(MockSiteSource::usajobs()?),
            Arc::new(MockSiteSource::opm()?),
        ]))
    }

    pub fn sources_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetches every source in order. Any failing source fails the whole run.
    pub async fn scrape(&self) -> Result<Vec<NewJob>, ScrapeError> {
        let mut jobs = Vec::new();
        for source in &self.sources {
            match source.fetch().await {
                Ok(found) => jobs.extend(found),
                Err(err) => {
                    error!("Error scraping {}: {}", source.name(), err);
                    metrics::record_scrape_run("failure", 0);
                    return Err(err);
                }
            }
        }
        info!(
            "Scraped {} jobs from {} sources",
            jobs.len(),
            self.sources.len()
        );
        metrics::record_scrape_run("success", jobs.len());
        Ok(jobs)
    }

    /// Scrapes and adds every listing to the store, returning the stored jobs.
    pub async fn scrape_into(&self, store: &dyn JobStore) -> Result<Vec<Job>, ScrapeError> {
        let scraped = self.scrape().await?;
        let created: Vec<Job> = scraped
            .into_iter()
            .map(|job| store.create_job(job))
            .collect();
        metrics::set_jobs_stored(store.jobs_count());
        Ok(created)
    }
}
