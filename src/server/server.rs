use anyhow::{Context, Result};
use std::future::IntoFuture;
use std::time::Duration;

use axum::{
    extract::State,
    http::Method,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use super::jobs_routes::make_jobs_routes;
use super::metrics::metrics_handler;
use super::{log_requests, state::ServerState};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub jobs_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        jobs_count: state.job_store.jobs_count(),
    })
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

pub fn make_app(state: ServerState) -> Router {
    let home_router: Router = match state.config.frontend_dir_path.clone() {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    home_router
        .merge(make_jobs_routes(state.clone()))
        .layer(cors_layer())
        .layer(middleware::from_fn_with_state(state, log_requests))
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

/// Serves the API and the metrics endpoint until `shutdown` is cancelled.
pub async fn run_server(state: ServerState, shutdown: CancellationToken) -> Result<()> {
    let host = state.config.host.clone();
    let port = state.config.port;
    let metrics_port = state.config.metrics_port;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let metrics_listener = tokio::net::TcpListener::bind((host.as_str(), metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}:{}", host, metrics_port))?;

    info!("Ready to serve at {}:{}!", host, port);
    info!("Metrics available at port {}!", metrics_port);

    let api_shutdown = shutdown.clone();
    let api = axum::serve(listener, make_app(state))
        .with_graceful_shutdown(async move { api_shutdown.cancelled().await })
        .into_future();
    let metrics = axum::serve(metrics_listener, make_metrics_app())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .into_future();

    tokio::try_join!(api, metrics)?;
    Ok(())
}
