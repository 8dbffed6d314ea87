//! Command and query handlers.

pub mod proposal;

pub use proposal::{
    DocumentSource, DownloadSnapshotHandler, ImportSnapshotHandler, LoadInitialDocumentHandler,
    LoadedDocument, PersistOnChangeHandler, RenderProposalHandler, RenderedProposal,
    ResetToDefaultHandler, ShareLinkHandler, SnapshotDownload,
};
