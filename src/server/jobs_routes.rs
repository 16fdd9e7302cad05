//! Job API routes

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::job_store::{Job, JobUpdate, NewJob};
use crate::search::JobFilters;

use super::error::ApiError;
use super::metrics::set_jobs_stored;
use super::state::{GuardedJobStore, ServerState};

#[derive(Deserialize, Debug, Default)]
pub struct ListJobsQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub deadline: Option<String>,
}

impl ListJobsQuery {
    fn is_empty(&self) -> bool {
        [&self.search, &self.location, &self.department, &self.deadline]
            .into_iter()
            .all(|value| value.as_deref().map_or(true, str::is_empty))
    }
}

#[derive(Serialize)]
struct ScrapeResponse {
    message: String,
    jobs: Vec<Job>,
}

/// GET /api/jobs
async fn list_jobs(
    State(store): State<GuardedJobStore>,
    query: Result<Query<ListJobsQuery>, QueryRejection>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected job query: {}", rejection.body_text());
        ApiError::InvalidQuery
    })?;

    if query.is_empty() {
        return Ok(Json(store.get_all_jobs()));
    }

    let filters = JobFilters {
        location: query.location,
        department: query.department,
        deadline: query.deadline,
    };
    let text = query.search.unwrap_or_default();
    Ok(Json(store.search_jobs(&text, &filters)))
}

/// GET /api/jobs/{id}
async fn get_job(
    State(store): State<GuardedJobStore>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    store.get_job(&id).map(Json).ok_or(ApiError::NotFound)
}

/// POST /api/jobs
async fn create_job(
    State(store): State<GuardedJobStore>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new_job) = payload.map_err(|rejection| {
        debug!("Rejected job body: {}", rejection.body_text());
        ApiError::InvalidJobData
    })?;

    let blank = new_job.blank_fields();
    if !blank.is_empty() {
        debug!("Rejected job with blank fields: {:?}", blank);
        return Err(ApiError::InvalidJobData);
    }

    let job = store.create_job(new_job);
    set_jobs_stored(store.jobs_count());
    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/jobs/{id}
async fn update_job(
    State(store): State<GuardedJobStore>,
    Path(id): Path<String>,
    payload: Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Json<Job>, ApiError> {
    let Json(update) = payload.map_err(|rejection| {
        debug!("Rejected job update body: {}", rejection.body_text());
        ApiError::InvalidJobData
    })?;

    let blank = update.blank_fields();
    if !blank.is_empty() {
        debug!("Rejected job update with blank fields: {:?}", blank);
        return Err(ApiError::InvalidJobData);
    }

    store
        .update_job(&id, update)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /api/jobs/{id}
async fn delete_job(
    State(store): State<GuardedJobStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !store.delete_job(&id) {
        return Err(ApiError::NotFound);
    }
    set_jobs_stored(store.jobs_count());
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/jobs/scrape
async fn scrape_jobs(State(state): State<ServerState>) -> Result<impl IntoResponse, ApiError> {
    let jobs = state
        .scraper
        .scrape_into(state.job_store.as_ref())
        .await
        .map_err(|err| {
            error!("Error scraping jobs: {}", err);
            ApiError::from(err)
        })?;

    info!("Scrape request added {} jobs", jobs.len());
    Ok(Json(ScrapeResponse {
        message: format!("Successfully scraped and added {} jobs", jobs.len()),
        jobs,
    }))
}

pub fn make_jobs_routes(state: ServerState) -> Router {
    Router::new()
        .route("/api/jobs", get(list_jobs).post(create_job))
        .route("/api/jobs/scrape", post(scrape_jobs))
        .route(
            "/api/jobs/{id}",
            get(get_job).patch(update_job).delete(delete_job),
        )
        .with_state(state)
}
