//! In-memory state provider backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use constructia_core::result::AppResult;
use constructia_core::traits::StateStore;

/// In-memory state provider.
///
/// Entries live until deleted; there is deliberately no TTL eviction.
/// Cloning shares the underlying map.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: DashMap<String, String>,
}

impl MemoryStateStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|e| e.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn delete_prefix(&self, prefix: &str) -> AppResult<u64> {
        let keys_to_remove: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();

        let count = keys_to_remove.len() as u64;
        for key in keys_to_remove {
            self.entries.remove(&key);
        }

        debug!(prefix, count, "Deleted keys matching prefix");
        Ok(count)
    }
}
