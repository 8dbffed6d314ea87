//! Document adapters - printable proposal rendering.
//!
//! - `MarkdownProposalRenderer` - Renders a proposal snapshot as Markdown
//! - `format` - en-US currency, number and range formatting

pub mod format;
mod markdown_renderer;

pub use markdown_renderer::MarkdownProposalRenderer;
