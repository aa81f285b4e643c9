use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;

use super::errors::StorageError;
use super::types::{CacheData, CacheEntry, CacheStore, InMemoryCacheStore};

const CACHE_PREFIX: &str = "cache";

impl InMemoryCacheStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory cache store");
        Self {
            entry: HashMap::new(),
        }
    }

    fn make_key(prefix: &str, key: &str) -> String {
        format!("{CACHE_PREFIX}:{prefix}:{key}")
    }

    fn purge_expired(&mut self) {
        let now = Utc::now();
        let before = self.entry.len();
        self.entry.retain(|_, e| e.expires_at > now);
        let purged = before - self.entry.len();
        if purged > 0 {
            tracing::debug!("Purged {} expired cache entries", purged);
        }
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: u64,
    ) -> Result<(), StorageError> {
        self.purge_expired();
        let expires_at = i64::try_from(ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|d| Utc::now().checked_add_signed(d))
            .ok_or_else(|| StorageError::Storage(format!("TTL out of range: {ttl}")))?;
        let entry = CacheEntry {
            data: value,
            expires_at,
        };
        self.entry.insert(Self::make_key(prefix, key), entry);
        Ok(())
    }

    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let key = Self::make_key(prefix, key);
        Ok(self
            .entry
            .get(&key)
            .filter(|e| e.expires_at > Utc::now())
            .map(|e| e.data.clone()))
    }

    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError> {
        let key = Self::make_key(prefix, key);
        self.entry.remove(&key);
        Ok(())
    }

    async fn take(&mut self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let key = Self::make_key(prefix, key);
        Ok(self
            .entry
            .remove(&key)
            .filter(|e| e.expires_at > Utc::now())
            .map(|e| e.data))
    }
}
