use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;

use super::errors::StorageError;

/// Serialized value kept in a cache store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheData {
    pub value: String,
}

impl CacheData {
    pub(crate) fn from_value<T: Serialize>(value: &T) -> Result<Self, StorageError> {
        Ok(Self {
            value: serde_json::to_string(value)?,
        })
    }

    pub(crate) fn to_value<T: DeserializeOwned>(&self) -> Result<T, StorageError> {
        Ok(serde_json::from_str(&self.value)?)
    }
}

#[derive(Debug, Clone)]
pub(super) struct CacheEntry {
    pub(super) data: CacheData,
    pub(super) expires_at: DateTime<Utc>,
}

pub struct InMemoryCacheStore {
    pub(super) entry: HashMap<String, CacheEntry>,
}

/// Short-lived key/value storage for pending OAuth2 states and sessions.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Put a value into the store. It is dropped after `ttl` seconds.
    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: u64,
    ) -> Result<(), StorageError>;

    /// Get an unexpired value from the store.
    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError>;

    /// Remove a value from the store.
    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError>;

    /// Remove a value and return it if it had not expired yet.
    async fn take(&mut self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError>;
}
