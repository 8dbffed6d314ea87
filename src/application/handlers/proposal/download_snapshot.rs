//! DownloadSnapshotHandler - Packages the document as a downloadable file.

use crate::adapters::transfer::{self, TransferError, SNAPSHOT_FILE_NAME, SNAPSHOT_MEDIA_TYPE};
use crate::domain::proposal::ProposalDocument;

/// A file ready to hand to the host's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDownload {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Packages the current document under the fixed snapshot file name.
#[derive(Debug, Default)]
pub struct DownloadSnapshotHandler;

impl DownloadSnapshotHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, document: &ProposalDocument) -> Result<SnapshotDownload, TransferError> {
        let bytes = transfer::export_file(document)?;
        Ok(SnapshotDownload {
            file_name: SNAPSHOT_FILE_NAME,
            media_type: SNAPSHOT_MEDIA_TYPE,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_uses_fixed_name_and_json_type() {
        let doc = ProposalDocument::default_document_on("2025-01-15");

        let download = DownloadSnapshotHandler::new().handle(&doc).unwrap();

        assert_eq!(download.file_name, "xore-roofing-proposal.json");
        assert_eq!(download.media_type, "application/json");
        assert_eq!(transfer::import_file(&download.bytes).unwrap(), doc);
    }

    #[test]
    fn file_name_does_not_depend_on_document() {
        let doc = ProposalDocument::default_document_on("2031-12-31").with_date("renamed");

        let download = DownloadSnapshotHandler::new().handle(&doc).unwrap();

        assert_eq!(download.file_name, SNAPSHOT_FILE_NAME);
    }
}
