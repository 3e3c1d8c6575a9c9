use std::sync::Arc;

use crate::application::services::{CatcherService, StatsService};
use crate::config::Config;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catcher: CatcherService,
    pub stats: Arc<StatsService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            catcher: CatcherService::new(),
            stats: Arc::new(StatsService::new()),
        }
    }
}
