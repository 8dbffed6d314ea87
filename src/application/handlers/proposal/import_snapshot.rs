//! ImportSnapshotHandler - Replaces the document with an uploaded file.
//!
//! All or nothing: on error the caller keeps its current document.

use std::path::Path;

use crate::adapters::transfer::{self, ImportError};
use crate::domain::proposal::ProposalDocument;

#[derive(Debug, Clone, Default)]
pub struct ImportSnapshotHandler;

impl ImportSnapshotHandler {
    pub fn new() -> Self {
        Self
    }

    /// Imports file contents already in memory.
    pub fn handle(&self, bytes: &[u8]) -> Result<ProposalDocument, ImportError> {
        transfer::import_file(bytes).map_err(log_rejection)
    }

    /// Reads and imports a file from disk.
    pub async fn handle_path(&self, path: impl AsRef<Path>) -> Result<ProposalDocument, ImportError> {
        transfer::read_upload(path).await.map_err(log_rejection)
    }
}

fn log_rejection(err: ImportError) -> ImportError {
    tracing::warn!(error = %err, "rejected proposal import");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::CURRENT_VERSION;
    use tempfile::TempDir;

    fn sample() -> ProposalDocument {
        ProposalDocument::default_document_on("2025-01-15")
    }

    #[test]
    fn imports_exported_bytes() {
        let doc = sample();
        let bytes = transfer::export_file(&doc).unwrap();
        assert_eq!(ImportSnapshotHandler::new().handle(&bytes).unwrap(), doc);
    }

    #[test]
    fn rejects_future_version() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["version"] = serde_json::json!(CURRENT_VERSION + 1);

        let result = ImportSnapshotHandler::new().handle(value.to_string().as_bytes());

        assert!(matches!(result, Err(ImportError::Version { .. })));
    }

    #[tokio::test]
    async fn imports_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("upload.json");
        let expected = sample();
        tokio::fs::write(&path, transfer::export_file(&expected).unwrap())
            .await
            .unwrap();

        let doc = ImportSnapshotHandler::new().handle_path(&path).await.unwrap();

        assert_eq!(doc, expected);
    }

    #[tokio::test]
    async fn path_with_bad_json_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("upload.json");
        tokio::fs::write(&path, b"{ broken").await.unwrap();

        let result = ImportSnapshotHandler::new().handle_path(&path).await;

        assert!(matches!(result, Err(ImportError::Format(_))));
    }
}
