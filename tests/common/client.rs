//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per job API endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// GET /
    pub async fn get_status(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Status request failed")
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    /// GET /api/jobs
    pub async fn list_jobs(&self) -> Response {
        self.list_jobs_with(&[]).await
    }

    /// GET /api/jobs with query parameters
    pub async fn list_jobs_with(&self, params: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/api/jobs"))
            .query(params)
            .send()
            .await
            .expect("List jobs request failed")
    }

    /// GET /api/jobs/{id}
    pub async fn get_job(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/api/jobs/{}", id)))
            .send()
            .await
            .expect("Get job request failed")
    }

    /// POST /api/jobs
    pub async fn create_job(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/api/jobs"))
            .json(body)
            .send()
            .await
            .expect("Create job request failed")
    }

    /// PATCH /api/jobs/{id}
    pub async fn update_job(&self, id: &str, body: &Value) -> Response {
        self.client
            .patch(self.url(&format!("/api/jobs/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Update job request failed")
    }

    /// DELETE /api/jobs/{id}
    pub async fn delete_job(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/api/jobs/{}", id)))
            .send()
            .await
            .expect("Delete job request failed")
    }

    /// POST /api/jobs/scrape
    pub async fn scrape(&self) -> Response {
        self.client
            .post(self.url("/api/jobs/scrape"))
            .send()
            .await
            .expect("Scrape request failed")
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Lists jobs and returns their titles in response order.
    pub async fn list_titles(&self, params: &[(&str, &str)]) -> Vec<String> {
        let response = self.list_jobs_with(params).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let jobs: Vec<Value> = response.json().await.expect("Invalid jobs JSON");
        jobs.iter()
            .map(|job| job["title"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
