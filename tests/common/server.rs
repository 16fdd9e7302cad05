//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own in-memory store.

use super::constants::*;
use super::fixtures::fixture_jobs;
use govjobs_server::job_store::{InMemoryJobStore, JobStore};
use govjobs_server::scraper::Scraper;
use govjobs_server::server::{make_app, RequestsLoggingLevel, ServerConfig, ServerState};
use govjobs_server::user::InMemoryUserStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance backed by the fixture jobs
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Job store for direct access in tests
    pub job_store: Arc<dyn JobStore>,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port, scraping the mock job boards
    pub async fn spawn() -> Self {
        let scraper = Scraper::with_mock_sites().expect("Failed to build mock scraper");
        Self::spawn_with_scraper(scraper).await
    }

    /// Spawns a new test server using the given scraper
    ///
    /// # Panics
    ///
    /// Panics if port binding fails or the server doesn't become ready within timeout.
    pub async fn spawn_with_scraper(scraper: Scraper) -> Self {
        let job_store: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::with_jobs(fixture_jobs()));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            ..Default::default()
        };
        let state = ServerState::new(
            config,
            job_store.clone(),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(scraper),
        );
        let app = make_app(state);

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            job_store,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the status endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
