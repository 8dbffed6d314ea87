//! ResetToDefaultHandler - Discards the stored snapshot and starts over.

use crate::adapters::persistence::SnapshotPersistence;
use crate::domain::proposal::ProposalDocument;

pub struct ResetToDefaultHandler {
    persistence: SnapshotPersistence,
}

impl ResetToDefaultHandler {
    pub fn new(persistence: SnapshotPersistence) -> Self {
        Self { persistence }
    }

    /// Clears the stored snapshot and returns a fresh default document.
    pub async fn handle(&self) -> ProposalDocument {
        self.persistence.clear().await;
        ProposalDocument::default_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemorySnapshotStore;
    use crate::domain::proposal::is_compatible;
    use std::sync::Arc;

    #[tokio::test]
    async fn clears_snapshot_and_returns_defaults() {
        let store = InMemorySnapshotStore::new();
        let persistence = SnapshotPersistence::new(Arc::new(store.clone()));
        persistence
            .save(&ProposalDocument::default_document_on("2020-01-01"))
            .await;

        let doc = ResetToDefaultHandler::new(persistence.clone()).handle().await;

        assert!(is_compatible(&doc));
        assert_eq!(doc.selected_scenario_id.as_str(), "scenario-b");
        assert!(store.is_empty().await);
        assert_eq!(persistence.load().await, None);
    }
}
