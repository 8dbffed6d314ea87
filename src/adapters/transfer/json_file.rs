//! JSON file export and import.
//!
//! Export writes the document as pretty-printed UTF-8 JSON. Import is all or
//! nothing: the payload must be UTF-8, a JSON object, carry the current
//! version, and match the document structure.

use std::path::Path;

use thiserror::Error;

use crate::domain::proposal::{document_from_value, ProposalDocument, SchemaError, CURRENT_VERSION};

/// Suggested download name for exported snapshots.
pub const SNAPSHOT_FILE_NAME: &str = "xore-roofing-proposal.json";

/// Media type of exported snapshots.
pub const SNAPSHOT_MEDIA_TYPE: &str = "application/json";

/// Errors surfaced to the user when an import is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not UTF-8, not JSON, not an object, or the wrong shape.
    #[error("Unable to parse JSON file: {0}")]
    Format(String),

    /// Well-formed, but written by an incompatible schema version.
    #[error("Incompatible proposal version: found {found:?}, expected {expected}")]
    Version { found: Option<u64>, expected: u32 },

    /// The upload could not be read.
    #[error("Unable to read file {path}: {message}")]
    Read { path: String, message: String },
}

impl ImportError {
    pub fn format(message: impl Into<String>) -> Self {
        ImportError::Format(message.into())
    }
}

impl From<SchemaError> for ImportError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::IncompatibleVersion { found } => ImportError::Version {
                found,
                expected: CURRENT_VERSION,
            },
            other => ImportError::Format(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Failed to serialize proposal: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serializes a document for download.
pub fn export_file(document: &ProposalDocument) -> Result<Vec<u8>, TransferError> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Parses an uploaded snapshot.
pub fn import_file(bytes: &[u8]) -> Result<ProposalDocument, ImportError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ImportError::format(format!("file is not UTF-8: {}", e)))?;

    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ImportError::format(format!("file is not JSON: {}", e)))?;

    let document = document_from_value(value)?;
    tracing::debug!(date = %document.date, "imported proposal snapshot");
    Ok(document)
}

/// Reads an upload from disk and imports it.
pub async fn read_upload(path: impl AsRef<Path>) -> Result<ProposalDocument, ImportError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| ImportError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    import_file(&bytes)
}
