//! Application state

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use passguard_core::breach::{BreachChecker, HibpClient};
use passguard_core::store::{PostgresStatusStore, StatusStore};

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Status-check store, opened once per process
    pub store: Arc<dyn StatusStore>,
    /// Breach checker over the remote range lookup
    pub breach_checker: BreachChecker,
    /// Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let store =
            PostgresStatusStore::connect(&config.database_url, config.db_name.as_deref()).await?;

        let lookup = HibpClient::new(
            config.hibp_api_url.clone(),
            Duration::from_secs(config.hibp_timeout_secs),
            &config.hibp_user_agent,
        )?;

        Ok(Self::from_parts(
            Arc::new(store),
            BreachChecker::new(Arc::new(lookup)),
            config.clone(),
        ))
    }

    /// Assemble state from already-built collaborators
    pub fn from_parts(
        store: Arc<dyn StatusStore>,
        breach_checker: BreachChecker,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            breach_checker,
            config: Arc::new(config),
        }
    }

    /// Release process-lifetime resources
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
