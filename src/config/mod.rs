mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

const SECONDS_PER_HOUR: u64 = 60 * 60;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub no_seed: bool,
    pub scrape_interval_hours: u64,
}

/// Where the store's initial jobs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in demo listings.
    Demo,
    /// A JSON array of jobs on disk.
    File(PathBuf),
    /// Start with an empty store.
    Empty,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub seed: SeedSource,
    pub scrape_interval_hours: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        if host.trim().is_empty() {
            bail!("host must not be empty");
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port == metrics_port && port != 0 {
            bail!("port and metrics_port must differ, both are {}", port);
        }

        let logging_level = match file.logging_level {
            Some(level) => match parse_logging_level(&level) {
                Some(level) => level,
                None => bail!("Unknown logging_level in config file: {:?}", level),
            },
            None => cli.logging_level.clone(),
        };

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            if !PathBuf::from(dir).is_dir() {
                bail!("frontend_dir_path is not a directory: {:?}", dir);
            }
        }

        let no_seed = file.no_seed.unwrap_or(cli.no_seed);
        let seed_file = file
            .seed_file
            .map(PathBuf::from)
            .or_else(|| cli.seed_file.clone());
        let seed = match (no_seed, seed_file) {
            (true, _) => SeedSource::Empty,
            (false, Some(path)) => {
                if !path.is_file() {
                    bail!("Seed file does not exist: {:?}", path);
                }
                SeedSource::File(path)
            }
            (false, None) => SeedSource::Demo,
        };

        let scrape_interval_hours = file
            .scrape_interval_hours
            .unwrap_or(cli.scrape_interval_hours);
        if scrape_interval_hours.checked_mul(SECONDS_PER_HOUR).is_none() {
            bail!("scrape_interval_hours is too large: {}", scrape_interval_hours);
        }

        Ok(Self {
            host,
            port,
            metrics_port,
            logging_level,
            frontend_dir_path,
            seed,
            scrape_interval_hours,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }

    /// None when periodic scraping is disabled.
    pub fn scrape_interval(&self) -> Option<Duration> {
        let seconds = self.scrape_interval_hours.saturating_mul(SECONDS_PER_HOUR);
        (seconds > 0).then(|| Duration::from_secs(seconds))
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn default_cli() -> CliConfig {
        CliConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
            metrics_port: 9091,
            logging_level: RequestsLoggingLevel::Path,
            frontend_dir_path: None,
            seed_file: None,
            no_seed: false,
            scrape_interval_hours: 0,
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert_eq!(parse_logging_level("none"), Some(RequestsLoggingLevel::None));
        assert_eq!(parse_logging_level("body"), Some(RequestsLoggingLevel::Body));
        // Case insensitive
        assert_eq!(parse_logging_level("PATH"), Some(RequestsLoggingLevel::Path));
        assert!(parse_logging_level("invalid").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let config = AppConfig::resolve(&default_cli(), None).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Path);
        assert_eq!(config.frontend_dir_path, None);
        assert_eq!(config.seed, SeedSource::Demo);
        assert_eq!(config.scrape_interval(), None);
    }

    #[test]
    fn test_toml_overrides_cli() {
        let frontend = TempDir::new().unwrap();
        let file = FileConfig {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            logging_level: Some("headers".to_string()),
            frontend_dir_path: Some(frontend.path().to_string_lossy().into_owned()),
            scrape_interval_hours: Some(12),
            ..Default::default()
        };

        let config = AppConfig::resolve(&default_cli(), Some(file)).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
        assert!(config.frontend_dir_path.is_some());
        assert_eq!(
            config.scrape_interval(),
            Some(Duration::from_secs(12 * 60 * 60))
        );

        let server_config = config.server_config();
        assert_eq!(server_config.port, 8080);
        assert_eq!(server_config.requests_logging_level, RequestsLoggingLevel::Headers);
    }

    #[test]
    fn test_seed_sources() {
        let seed = NamedTempFile::new().unwrap();

        let cli = CliConfig {
            seed_file: Some(seed.path().to_path_buf()),
            ..default_cli()
        };
        let config = AppConfig::resolve(&cli, None).unwrap();
        assert_eq!(config.seed, SeedSource::File(seed.path().to_path_buf()));

        let file = FileConfig {
            no_seed: Some(true),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(config.seed, SeedSource::Empty);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cli = CliConfig {
            seed_file: Some(PathBuf::from("/nonexistent/jobs.json")),
            ..default_cli()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());

        let cli = CliConfig {
            frontend_dir_path: Some("/nonexistent/frontend".to_string()),
            ..default_cli()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());

        let file = FileConfig {
            logging_level: Some("verbose".to_string()),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&default_cli(), Some(file)).is_err());

        let file = FileConfig {
            metrics_port: Some(3001),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&default_cli(), Some(file)).is_err());

        let cli = CliConfig {
            scrape_interval_hours: u64::MAX,
            ..default_cli()
        };
        let err = AppConfig::resolve(&cli, None).unwrap_err();
        assert!(err.to_string().contains("scrape_interval_hours"));
    }

    #[test]
    fn test_largest_scrape_interval_is_accepted() {
        let hours = u64::MAX / SECONDS_PER_HOUR;
        let file = FileConfig {
            scrape_interval_hours: Some(hours),
            ..Default::default()
        };
        let config = AppConfig::resolve(&default_cli(), Some(file)).unwrap();
        assert_eq!(
            config.scrape_interval(),
            Some(Duration::from_secs(hours * SECONDS_PER_HOUR))
        );
    }
}
