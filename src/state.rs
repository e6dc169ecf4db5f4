// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::completion::{CompletionClient, CompletionError, GatewayClient};
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub metrics: MetricsManager,
    pub admin_key: Option<String>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, admin_key: Option<String>) -> Self {
        Self {
            completion,
            metrics: MetricsManager::new(),
            admin_key,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, CompletionError> {
        let gateway = GatewayClient::new(
            config.upstream_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.upstream_timeout,
        )?;
        Ok(Self::new(Arc::new(gateway), config.admin_key.clone()))
    }
}
