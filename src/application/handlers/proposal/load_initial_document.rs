//! LoadInitialDocumentHandler - Chooses the document a session starts with.
//!
//! Priority: a share link in the current location, then the stored snapshot,
//! then the default template. Every fallback is silent.

use crate::adapters::persistence::SnapshotPersistence;
use crate::adapters::share;
use crate::domain::proposal::ProposalDocument;

/// Where the initial document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    Link,
    Snapshot,
    Default,
}

/// Result of loading the initial document.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ProposalDocument,
    pub source: DocumentSource,
}

/// Handler for the startup load.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = LoadInitialDocumentHandler::new(persistence);
/// let loaded = handler.handle(Some("https://host/proposal#state=...")).await;
/// ```
pub struct LoadInitialDocumentHandler {
    persistence: SnapshotPersistence,
}

impl LoadInitialDocumentHandler {
    pub fn new(persistence: SnapshotPersistence) -> Self {
        Self { persistence }
    }

    /// `location` is the current URL or its fragment, if the host has one.
    pub async fn handle(&self, location: Option<&str>) -> LoadedDocument {
        if let Some(document) = location.and_then(share::token_from_url).and_then(share::decode) {
            tracing::debug!("loaded proposal from share link");
            return LoadedDocument {
                document,
                source: DocumentSource::Link,
            };
        }

        if let Some(document) = self.persistence.load().await {
            tracing::debug!(key = %self.persistence.key(), "loaded proposal from snapshot");
            return LoadedDocument {
                document,
                source: DocumentSource::Snapshot,
            };
        }

        tracing::debug!("starting from default proposal");
        LoadedDocument {
            document: ProposalDocument::default_document(),
            source: DocumentSource::Default,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemorySnapshotStore;
    use crate::domain::proposal::{is_compatible, CURRENT_VERSION};
    use crate::ports::SnapshotStore;
    use std::sync::Arc;

    fn setup() -> (InMemorySnapshotStore, SnapshotPersistence, LoadInitialDocumentHandler) {
        let store = InMemorySnapshotStore::new();
        let persistence = SnapshotPersistence::new(Arc::new(store.clone()));
        let handler = LoadInitialDocumentHandler::new(persistence.clone());
        (store, persistence, handler)
    }

    fn linked() -> ProposalDocument {
        ProposalDocument::default_document_on("2025-02-01")
    }

    fn stored() -> ProposalDocument {
        ProposalDocument::default_document_on("2025-03-01")
    }

    #[tokio::test]
    async fn link_takes_priority_over_snapshot() {
        let (_, persistence, handler) = setup();
        persistence.save(&stored()).await;
        let linked = linked();
        let url = share::share_url("https://example.com/", &linked);

        let loaded = handler.handle(Some(&url)).await;

        assert_eq!(loaded.source, DocumentSource::Link);
        assert_eq!(loaded.document, linked);
    }

    #[tokio::test]
    async fn snapshot_used_without_link() {
        let (_, persistence, handler) = setup();
        let stored = stored();
        persistence.save(&stored).await;

        let loaded = handler.handle(Some("https://example.com/")).await;

        assert_eq!(loaded.source, DocumentSource::Snapshot);
        assert_eq!(loaded.document, stored);
    }

    #[tokio::test]
    async fn invalid_link_falls_back_to_snapshot() {
        let (_, persistence, handler) = setup();
        persistence.save(&stored()).await;

        let loaded = handler.handle(Some("#state=garbage")).await;

        assert_eq!(loaded.source, DocumentSource::Snapshot);
    }

    #[tokio::test]
    async fn default_used_when_nothing_stored() {
        let (_, _, handler) = setup();

        let loaded = handler.handle(None).await;

        assert_eq!(loaded.source, DocumentSource::Default);
        assert!(is_compatible(&loaded.document));
    }

    #[tokio::test]
    async fn incompatible_snapshot_falls_back_to_default() {
        let (store, persistence, handler) = setup();
        let mut value = serde_json::to_value(stored()).unwrap();
        value["version"] = serde_json::json!(CURRENT_VERSION + 1);
        store.put(persistence.key(), &value.to_string()).await.unwrap();

        let loaded = handler.handle(None).await;

        assert_eq!(loaded.source, DocumentSource::Default);
    }
}
