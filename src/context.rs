use std::sync::Arc;

use crate::config::AppConfig;
use crate::infra::memory::InMemoryTicketStore;
use crate::services::TicketStore;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub tickets: Arc<dyn TicketStore>,
}

impl AppContext {
    pub fn new(config: AppConfig, tickets: Arc<dyn TicketStore>) -> Self {
        Self { config, tickets }
    }

    /// Builds the in-memory store from `config`; the store is fully loaded
    /// before this returns.
    pub fn from_config(config: AppConfig) -> Self {
        let store = InMemoryTicketStore::load(&config.data_path, config.latency);
        Self::new(config, Arc::new(store))
    }
}
