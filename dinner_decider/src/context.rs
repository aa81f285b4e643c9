use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{SharedCacheStore, memory_cache_store};
use crate::utils::{UtilError, get_client};

/// Everything a request handler needs: the startup configuration, the HTTP
/// client for upstream calls, and the store holding pending states and
/// sessions.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub client: reqwest::Client,
    pub store: SharedCacheStore,
}

impl AppContext {
    /// Builds a context backed by a fresh in-memory store.
    pub fn new(config: AppConfig) -> Result<Self, UtilError> {
        Ok(Self::with_store(config, get_client()?, memory_cache_store()))
    }

    pub fn with_store(config: AppConfig, client: reqwest::Client, store: SharedCacheStore) -> Self {
        Self {
            config: Arc::new(config),
            client,
            store,
        }
    }
}
