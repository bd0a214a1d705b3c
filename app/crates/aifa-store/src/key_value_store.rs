use crate::Result as StoreResult;

use async_trait::async_trait;

/// Durable string-to-string storage shared by everything that reads identity.
///
/// Each key is written independently; there is no multi-key transaction.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been set or was removed.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
