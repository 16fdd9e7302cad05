use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use crate::job_store::JobStore;
use crate::scraper::Scraper;
use crate::user::UserStore;

use super::ServerConfig;

pub type GuardedJobStore = Arc<dyn JobStore>;
pub type GuardedUserStore = Arc<dyn UserStore>;
pub type GuardedScraper = Arc<Scraper>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub job_store: GuardedJobStore,
    pub user_store: GuardedUserStore,
    pub scraper: GuardedScraper,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        job_store: GuardedJobStore,
        user_store: GuardedUserStore,
        scraper: GuardedScraper,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            job_store,
            user_store,
            scraper,
            hash: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedJobStore {
    fn from_ref(input: &ServerState) -> Self {
        input.job_store.clone()
    }
}
