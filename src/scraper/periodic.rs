use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::Scraper;

/// Re-runs the scraper every `interval` until `shutdown` is cancelled.
/// The first run happens one interval after startup. Results are only
/// logged, the job store is never touched.
pub fn spawn_periodic_scrape(
    scraper: Arc<Scraper>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        // Skip the first immediate tick, wait for the first interval
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    info!("Running scheduled job scraping...");
                    match scraper.scrape().await {
                        Ok(found) => info!("Scheduled scraping found {} jobs", found.len()),
                        Err(err) => error!("Scheduled scraping failed: {}", err),
                    }
                }
                _ = shutdown.cancelled() => {
                    info!("Stopping scheduled job scraping");
                    break;
                }
            }
        }
    })
}
