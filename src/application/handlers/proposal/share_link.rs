//! ShareLinkHandler - Builds a share URL and copies it to the clipboard.

use std::sync::Arc;

use crate::adapters::share;
use crate::domain::proposal::ProposalDocument;
use crate::ports::ClipboardSink;

/// Handler for the "copy share link" action.
///
/// # Dependencies
///
/// - `ClipboardSink`: Receives the URL
pub struct ShareLinkHandler {
    base_url: String,
    clipboard: Arc<dyn ClipboardSink>,
}

impl ShareLinkHandler {
    pub fn new(base_url: impl Into<String>, clipboard: Arc<dyn ClipboardSink>) -> Self {
        Self {
            base_url: base_url.into(),
            clipboard,
        }
    }

    /// Returns the share URL. A clipboard failure is logged, not returned.
    pub async fn handle(&self, document: &ProposalDocument) -> String {
        let url = share::share_url(&self.base_url, document);

        if let Err(e) = self.clipboard.write_text(&url).await {
            tracing::warn!(error = %e, "clipboard copy failed");
        }

        url
    }
}
