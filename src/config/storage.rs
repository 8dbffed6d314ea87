//! Snapshot storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::persistence::{is_valid_key, DEFAULT_MAX_SNAPSHOT_BYTES, DEFAULT_SNAPSHOT_KEY};

/// Where and how the current snapshot is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory that holds snapshot files
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Key the current snapshot is stored under
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,

    /// Largest snapshot accepted by the store, in bytes
    #[serde(default = "default_max_snapshot_bytes")]
    pub max_snapshot_bytes: u64,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.snapshot_dir"));
        }
        if self.snapshot_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.snapshot_key"));
        }
        if !is_valid_key(&self.snapshot_key) {
            return Err(ValidationError::InvalidSnapshotKey);
        }
        if self.max_snapshot_bytes == 0 {
            return Err(ValidationError::InvalidSnapshotQuota);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            snapshot_key: default_snapshot_key(),
            max_snapshot_bytes: default_max_snapshot_bytes(),
        }
    }
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./data/snapshots")
}

fn default_snapshot_key() -> String {
    DEFAULT_SNAPSHOT_KEY.to_string()
}

fn default_max_snapshot_bytes() -> u64 {
    DEFAULT_MAX_SNAPSHOT_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.snapshot_dir, PathBuf::from("./data/snapshots"));
        assert_eq!(config.snapshot_key, "xore-roofing-proposal-state-v1");
        assert_eq!(config.max_snapshot_bytes, 5 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_key() {
        let config = StorageConfig {
            snapshot_key: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.snapshot_key"))
        );
    }

    #[test]
    fn test_validation_key_must_be_file_stem() {
        let config = StorageConfig {
            snapshot_key: "proposals/current".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSnapshotKey));
    }

    #[test]
    fn test_validation_zero_quota() {
        let config = StorageConfig {
            max_snapshot_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSnapshotQuota));
    }
}
