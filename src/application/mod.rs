//! Application layer - Handlers for the application shell.
//!
//! This layer orchestrates domain operations and coordinates between ports
//! and adapters. The shell itself (widgets, routing, dialogs) lives outside
//! the crate.

pub mod handlers;

pub use handlers::{
    DocumentSource, DownloadSnapshotHandler, ImportSnapshotHandler, LoadInitialDocumentHandler,
    LoadedDocument, PersistOnChangeHandler, RenderProposalHandler, RenderedProposal,
    ResetToDefaultHandler, ShareLinkHandler, SnapshotDownload,
};
