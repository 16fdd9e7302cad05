pub mod config;
mod error;
mod http_layers;
mod jobs_routes;
pub mod metrics;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub use state::ServerState;
