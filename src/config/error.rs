//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Snapshot key may only contain letters, digits, '.', '_' and '-'")]
    InvalidSnapshotKey,

    #[error("Snapshot quota must be greater than zero")]
    InvalidSnapshotQuota,

    #[error("Share base URL must be an absolute http(s) URL without a fragment")]
    InvalidShareBaseUrl,
}
