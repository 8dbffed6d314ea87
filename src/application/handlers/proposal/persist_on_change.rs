//! PersistOnChangeHandler - Mirrors every document replacement to storage.

use crate::adapters::persistence::SnapshotPersistence;
use crate::domain::proposal::ProposalDocument;

/// Handler called by the shell after each edit. Never fails.
pub struct PersistOnChangeHandler {
    persistence: SnapshotPersistence,
}

impl PersistOnChangeHandler {
    pub fn new(persistence: SnapshotPersistence) -> Self {
        Self { persistence }
    }

    pub async fn handle(&self, document: &ProposalDocument) {
        self.persistence.save(document).await;
    }
}
