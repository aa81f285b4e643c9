mod errors;
mod memory;
mod types;

use std::sync::Arc;
use tokio::sync::Mutex;

pub use errors::StorageError;
pub use types::{CacheData, CacheStore, InMemoryCacheStore};

/// Cache store shared between request handlers.
pub type SharedCacheStore = Arc<Mutex<Box<dyn CacheStore>>>;

pub fn memory_cache_store() -> SharedCacheStore {
    Arc::new(Mutex::new(Box::new(InMemoryCacheStore::new())))
}
