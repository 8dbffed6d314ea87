//! Proposal Renderer Port - Printable summary generation interface.
//!
//! The domain hands a document snapshot to the renderer and gets text back.
//! Adapters (like `MarkdownProposalRenderer`) decide the concrete layout.

use crate::domain::proposal::ProposalDocument;

/// Port for rendering a printable proposal summary.
///
/// # Contract
///
/// Implementations must:
/// - Never fail: every compatible document renders
/// - Render the selected scenario's metrics, or a placeholder when the
///   selection dangles
/// - Be deterministic for a given snapshot and options
pub trait ProposalRenderer: Send + Sync {
    /// Render the full printable proposal.
    fn render(&self, document: &ProposalDocument, options: &RenderOptions) -> String;

    /// One-line budget/CAC headline for the active scenario.
    fn metrics_headline(&self, document: &ProposalDocument) -> String;
}

/// Options for proposal rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit headings for sections that have no entries.
    pub include_empty_sections: bool,

    /// Title shown at the top of the document.
    pub title: String,

    /// Subtitle shown under the title.
    pub subtitle: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_empty_sections: true,
            title: "Go-To-Market Proposal".to_string(),
            subtitle: "Auxilium × Xore Roofing".to_string(),
        }
    }
}

impl RenderOptions {
    /// Options for a compact hand-off copy.
    pub fn compact() -> Self {
        Self {
            include_empty_sections: false,
            ..Self::default()
        }
    }
}
