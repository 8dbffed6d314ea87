//! File-based Snapshot Store Adapter
//!
//! Stores each key as a single JSON file on disk. Every write goes through its
//! own uniquely named temp file and a rename, so a crash or an overlapping
//! write never leaves a half-written snapshot behind. Keys map to file names
//! one to one; a key that is not already a safe file stem is rejected.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::ports::{SnapshotStore, StoreError};

/// Default quota, mirroring a browser's per-origin local storage budget (5 MB).
pub const DEFAULT_MAX_SNAPSHOT_BYTES: u64 = 5 * 1024 * 1024;

/// File-based storage for document snapshots.
///
/// # Directory Structure
///
/// ```text
/// {base_path}/
/// ├── xore-roofing-proposal-state-v1.json
/// └── xore-roofing-proposal-state-v1.json.<uuid>.tmp   (only during a write)
/// ```
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
    max_bytes: u64,
}

impl FileSnapshotStore {
    /// Create a new file store with a base directory and the default quota.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSnapshotStore::new("./data/snapshots");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            max_bytes: DEFAULT_MAX_SNAPSHOT_BYTES,
        }
    }

    /// Overrides the per-value size quota.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Get a fresh temp file path for one atomic write
    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.json.{}.tmp", key, Uuid::new_v4().simple()))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StoreError::io(format!(
                "Failed to create directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

/// Whether `key` can be used as a file stem as is.
///
/// Allowed: non-empty, only `[A-Za-z0-9._-]`, and not made of dots alone.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        && !key.chars().all(|c| c == '.')
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let size = value.len() as u64;
        if size > self.max_bytes {
            return Err(StoreError::quota_exceeded(size, self.max_bytes));
        }

        let final_path = self.key_path(key)?;
        let temp_path = self.temp_path(key);

        self.ensure_dir().await?;

        if let Err(e) = write_synced(&temp_path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Writes `value` to a new file at `temp_path` and flushes it to disk.
async fn write_synced(temp_path: &Path, value: &str) -> Result<(), StoreError> {
    let mut file = fs::File::create(temp_path).await.map_err(|e| {
        StoreError::io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    file.write_all(value.as_bytes()).await.map_err(|e| {
        StoreError::io(format!(
            "Failed to write to temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    file.sync_all().await.map_err(|e| {
        StoreError::io(format!(
            "Failed to sync temp file {}: {}",
            temp_path.display(),
            e
        ))
    })
}
