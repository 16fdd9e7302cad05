use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    /// When set, `/` serves the front end from this directory instead of the status page.
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "127.0.0.1".to_string(),
            port: 3001,
            metrics_port: 9091,
            frontend_dir_path: None,
        }
    }
}
