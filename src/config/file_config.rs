use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings read from the optional TOML config file. Present values override the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,
    pub seed_file: Option<String>,
    pub no_seed: Option<bool>,
    pub scrape_interval_hours: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
