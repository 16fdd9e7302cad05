//! Government job listings server library
//!
//! This library exposes the internal modules for testing and reuse by the binary.

pub mod config;
pub mod job_store;
pub mod scraper;
pub mod search;
pub mod server;
pub mod user;

// Re-export commonly used types for convenience
pub use job_store::{InMemoryJobStore, Job, JobStore, NewJob};
pub use scraper::Scraper;
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig, ServerState};
pub use user::{InMemoryUserStore, UserStore};
