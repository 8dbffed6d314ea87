//! Proposal handlers - the calls the application shell makes.
//!
//! The shell owns the single live document. These handlers take a snapshot
//! of it, touch the host (storage, clipboard, files) and return new values.

mod download_snapshot;
mod import_snapshot;
mod load_initial_document;
mod persist_on_change;
mod render_proposal;
mod reset_to_default;
mod share_link;

pub use download_snapshot::{DownloadSnapshotHandler, SnapshotDownload};
pub use import_snapshot::ImportSnapshotHandler;
pub use load_initial_document::{DocumentSource, LoadInitialDocumentHandler, LoadedDocument};
pub use persist_on_change::PersistOnChangeHandler;
pub use render_proposal::{RenderProposalHandler, RenderedProposal};
pub use reset_to_default::ResetToDefaultHandler;
pub use share_link::ShareLinkHandler;
