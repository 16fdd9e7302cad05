use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::scraper::ScrapeError;

/// Errors returned by the job API, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Job not found")]
    NotFound,

    #[error("Invalid job data")]
    InvalidJobData,

    #[error("Invalid query parameters")]
    InvalidQuery,

    #[error("Failed to scrape jobs")]
    ScrapeFailed(#[from] ScrapeError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidJobData | ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::ScrapeFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
