//! RenderProposalHandler - Produces the printable summary and header line.

use std::sync::Arc;

use crate::domain::proposal::ProposalDocument;
use crate::ports::{ProposalRenderer, RenderOptions};

/// Printable output for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProposal {
    pub content: String,
    pub headline: String,
}

/// Handler for the printable view.
///
/// # Dependencies
///
/// - `ProposalRenderer`: Generates the summary text
pub struct RenderProposalHandler {
    renderer: Arc<dyn ProposalRenderer>,
}

impl RenderProposalHandler {
    pub fn new(renderer: Arc<dyn ProposalRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(&self, document: &ProposalDocument, options: &RenderOptions) -> RenderedProposal {
        RenderedProposal {
            content: self.renderer.render(document, options),
            headline: self.renderer.metrics_headline(document),
        }
    }
}
