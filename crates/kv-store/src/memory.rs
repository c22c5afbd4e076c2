use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{KvStore, KvStoreError, Result};

#[derive(Debug, Default)]
struct InMemoryState {
    entries: HashMap<String, Value>,
    unavailable: bool,
}

/// In-memory key-value store.
///
/// Backs tests and hosts without a durable store, and provides the same
/// interface a durable implementation would. Cloning yields a handle to
/// the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKvStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryKvStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        self.state.write().await.entries.clear();
    }

    /// Makes every subsequent operation fail with
    /// [`KvStoreError::Unavailable`] until switched back. For exercising
    /// persistence-failure paths in tests.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let state = self.state.read().await;
        if state.unavailable {
            return Err(KvStoreError::Unavailable("store offline".to_string()));
        }
        Ok(state.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut state = self.state.write().await;
        if state.unavailable {
            return Err(KvStoreError::Unavailable("store offline".to_string()));
        }
        state.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.unavailable {
            return Err(KvStoreError::Unavailable("store offline".to_string()));
        }
        state.entries.remove(key);
        Ok(())
    }
}
