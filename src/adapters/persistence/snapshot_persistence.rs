//! Snapshot persistence - saves and restores the current document.
//!
//! Failures are logged and never reach the caller.

use std::sync::Arc;

use crate::domain::proposal::{document_from_value, ProposalDocument};
use crate::ports::SnapshotStore;

/// Storage key used when none is configured.
pub const DEFAULT_SNAPSHOT_KEY: &str = "xore-roofing-proposal-state-v1";

/// Reads and writes the single current snapshot under a fixed key.
#[derive(Clone)]
pub struct SnapshotPersistence {
    store: Arc<dyn SnapshotStore>,
    key: String,
}

impl SnapshotPersistence {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self::with_key(store, DEFAULT_SNAPSHOT_KEY)
    }

    pub fn with_key(store: Arc<dyn SnapshotStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrites the stored snapshot. Errors are logged and dropped.
    pub async fn save(&self, document: &ProposalDocument) {
        let serialized = match serde_json::to_string(document) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to serialize snapshot");
                return;
            }
        };

        if let Err(e) = self.store.put(&self.key, &serialized).await {
            tracing::warn!(key = %self.key, error = %e, "failed to save snapshot");
        }
    }

    /// Returns the stored snapshot if present, parseable and compatible.
    pub async fn load(&self) -> Option<ProposalDocument> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read snapshot");
                return None;
            }
        };

        let value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored snapshot is not valid JSON");
                return None;
            }
        };

        match document_from_value(value) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding stored snapshot");
                None
            }
        }
    }

    /// Removes the stored snapshot. Errors are logged and dropped.
    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key).await {
            tracing::warn!(key = %self.key, error = %e, "failed to clear snapshot");
        }
    }
}

impl std::fmt::Debug for SnapshotPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotPersistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
