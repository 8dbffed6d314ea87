//! In-Memory Snapshot Store Adapter
//!
//! Stores snapshots in memory. Useful for testing and for hosts without a
//! writable filesystem.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{SnapshotStore, StoreError};

/// In-memory storage for document snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    max_bytes: Option<u64>,
}

impl InMemorySnapshotStore {
    /// Create a new unbounded in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects values larger than `max_bytes`
    pub fn with_quota(max_bytes: u64) -> Self {
        Self {
            entries: Arc::default(),
            max_bytes: Some(max_bytes),
        }
    }

    /// Get the number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(max_bytes) = self.max_bytes {
            let size = value.len() as u64;
            if size > max_bytes {
                return Err(StoreError::quota_exceeded(size, max_bytes));
            }
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
