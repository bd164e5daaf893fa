//! Persisted local state capability.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the persisted local key/value state backing sessions.
///
/// Constructed once at startup and injected wherever session state is
/// needed; nothing reads ambient global state. Values are plain
/// strings (session records are stored as JSON). Entries never
/// expire inside the store itself; session expiry is checked lazily by
/// the reader, so a provider must not evict on its own.
#[async_trait]
pub trait StateStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, overwriting any existing entry.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Delete every key starting with `prefix`. Returns the number of
    /// keys removed.
    async fn delete_prefix(&self, prefix: &str) -> AppResult<u64>;
}
