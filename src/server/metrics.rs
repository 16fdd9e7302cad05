use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, IntCounter, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all server metrics
const PREFIX: &str = "govjobs";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    pub static ref JOBS_STORED: Gauge = Gauge::new(
        format!("{PREFIX}_jobs_stored"),
        "Number of jobs in the store, expired ones included"
    ).expect("Failed to create jobs_stored metric");

    pub static ref SCRAPE_RUNS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_scrape_runs_total"), "Scraper runs by outcome"),
        &["status"]
    ).expect("Failed to create scrape_runs_total metric");

    pub static ref SCRAPED_JOBS_TOTAL: IntCounter = IntCounter::new(
        format!("{PREFIX}_scraped_jobs_total"),
        "Jobs returned by successful scraper runs"
    ).expect("Failed to create scraped_jobs_total metric");
}

/// Register all metrics. Safe to call more than once.
pub fn init_metrics() {
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(JOBS_STORED.clone()));
    let _ = REGISTRY.register(Box::new(SCRAPE_RUNS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(SCRAPED_JOBS_TOTAL.clone()));
}

/// Collapses job ids so per-job paths share a label.
pub fn normalize_path(path: &str) -> String {
    match path.strip_prefix("/api/jobs/") {
        Some("scrape") => "/api/jobs/scrape".to_string(),
        Some(rest) if !rest.is_empty() => "/api/jobs/{id}".to_string(),
        _ => path.to_string(),
    }
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let path = normalize_path(path);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, &path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, &path])
        .observe(duration.as_secs_f64());
}

pub fn set_jobs_stored(count: usize) {
    JOBS_STORED.set(count as f64);
}

pub fn record_scrape_run(status: &str, scraped: usize) {
    SCRAPE_RUNS_TOTAL.with_label_values(&[status]).inc();
    SCRAPED_JOBS_TOTAL.inc_by(scraped as u64);
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
