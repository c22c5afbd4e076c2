use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Core trait for durable key-value store implementations.
///
/// The host environment provides the concrete store (browser storage, a
/// file, an embedded database); the core only relies on this contract.
/// Keys are namespaced strings (see [`crate::key`]), values are opaque
/// JSON-compatible records. All implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieves the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Deletes the value stored under `key`.
    ///
    /// Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Extension trait providing typed record access on top of [`KvStore`].
#[async_trait]
pub trait KvStoreExt: KvStore {
    /// Retrieves and deserializes the record stored under `key`.
    async fn get_record<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serializes `record` and stores it under `key`.
    async fn set_record<T: Serialize + Sync>(&self, key: &str, record: &T) -> Result<()> {
        self.set(key, serde_json::to_value(record)?).await
    }

    /// Checks whether any value is stored under `key`.
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

// Blanket implementation for all KvStore implementations
impl<T: KvStore + ?Sized> KvStoreExt for T {}
