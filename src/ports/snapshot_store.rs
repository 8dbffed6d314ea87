//! Snapshot Store Port - Durable key-value storage for document snapshots.
//!
//! The store is deliberately dumb: it holds opaque text under a key. Encoding,
//! version checks and fallback policy live in the persistence adapter that
//! sits on top of it.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during snapshot store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The value exceeds the store's capacity.
    #[error("Storage quota exceeded: {size_bytes} bytes (max: {max_bytes})")]
    QuotaExceeded { size_bytes: u64, max_bytes: u64 },

    /// The key cannot be stored by this backend.
    #[error("Invalid snapshot key: {key:?}")]
    InvalidKey { key: String },

    /// IO error during a store operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StoreError {
    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Creates a quota exceeded error.
    pub fn quota_exceeded(size_bytes: u64, max_bytes: u64) -> Self {
        Self::QuotaExceeded {
            size_bytes,
            max_bytes,
        }
    }
}

/// Port for a single-namespace key-value store.
///
/// # Contract
///
/// Implementations must:
/// - Overwrite on `put` (no history)
/// - Return `Ok(None)` from `get` for an absent key, never an error
/// - Treat `remove` of an absent key as success
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` if the backend cannot address `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::QuotaExceeded` if the value is too large.
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
