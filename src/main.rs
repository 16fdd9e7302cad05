use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import modules from the library crate
use govjobs_server::config::{self, AppConfig, SeedSource};
use govjobs_server::job_store::{seed, InMemoryJobStore, JobStore};
use govjobs_server::scraper::{spawn_periodic_scrape, Scraper};
use govjobs_server::server::{metrics, run_server, RequestsLoggingLevel, ServerState};
use govjobs_server::user::InMemoryUserStore;

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// JSON file with the jobs to load at startup instead of the built-in ones.
    #[clap(long, value_parser = parse_path)]
    pub seed_file: Option<PathBuf>,

    /// Start with an empty job store.
    #[clap(long)]
    pub no_seed: bool,

    /// Interval in hours between automatic scraper runs. Set to 0 to disable.
    #[clap(long, default_value_t = 0)]
    pub scrape_interval_hours: u64,
}

impl CliArgs {
    fn to_cli_config(&self) -> config::CliConfig {
        config::CliConfig {
            host: self.host.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            frontend_dir_path: self.frontend_dir_path.clone(),
            seed_file: self.seed_file.clone(),
            no_seed: self.no_seed,
            scrape_interval_hours: self.scrape_interval_hours,
        }
    }
}

fn build_job_store(seed_source: &SeedSource) -> Result<InMemoryJobStore> {
    let jobs = match seed_source {
        SeedSource::Demo => seed::demo_jobs(),
        SeedSource::File(path) => {
            info!("Loading seed jobs from {:?}...", path);
            seed::load_seed_file(path)?
        }
        SeedSource::Empty => vec![],
    };
    Ok(InMemoryJobStore::with_jobs(jobs))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Initializing metrics...");
    metrics::init_metrics();

    let job_store: Arc<dyn JobStore> = Arc::new(build_job_store(&app_config.seed)?);
    info!("Job store ready with {} jobs", job_store.jobs_count());
    metrics::set_jobs_stored(job_store.jobs_count());

    let scraper = Arc::new(Scraper::with_mock_sites()?);
    info!("Scraper ready with {} sources", scraper.sources_count());
    let shutdown_token = CancellationToken::new();

    if let Some(interval) = app_config.scrape_interval() {
        info!(
            "Scheduled scraping enabled every {} hours",
            app_config.scrape_interval_hours
        );
        spawn_periodic_scrape(scraper.clone(), interval, shutdown_token.clone());
    }

    let state = ServerState::new(
        app_config.server_config(),
        job_store,
        Arc::new(InMemoryUserStore::new()),
        scraper,
    );

    tokio::select! {
        result = run_server(state, shutdown_token.clone()) => {
            info!("HTTP server stopped: {:?}", result);
            shutdown_token.cancel();
            result
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown");
            shutdown_token.cancel();
            // Give the scrape task a moment to stop
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(())
        }
    }
}
