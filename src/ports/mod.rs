//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the host environment. Adapters implement these ports.
//!
//! - `SnapshotStore` - Durable key-value storage for the current snapshot
//! - `ClipboardSink` - Asynchronous text sink used when sharing links
//! - `ProposalRenderer` - Printable summary generation

mod clipboard;
mod proposal_renderer;
mod snapshot_store;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use proposal_renderer::{ProposalRenderer, RenderOptions};
pub use snapshot_store::{SnapshotStore, StoreError};
