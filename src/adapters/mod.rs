//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the host environment:
//! - `persistence` - Snapshot stores (file, in-memory) and save/load/clear
//! - `share` - Share-link token codec
//! - `transfer` - JSON file export and upload import
//! - `clipboard` - Clipboard sinks
//! - `document` - Printable Markdown summary

pub mod clipboard;
pub mod document;
pub mod persistence;
pub mod share;
pub mod transfer;

pub use clipboard::InMemoryClipboard;
pub use document::MarkdownProposalRenderer;
pub use persistence::{FileSnapshotStore, InMemorySnapshotStore, SnapshotPersistence};
pub use transfer::{ImportError, TransferError};
