//! Persistence adapters for document snapshots.
//!
//! - `FileSnapshotStore` - One JSON file per key, written atomically
//! - `InMemorySnapshotStore` - HashMap-backed store for tests
//! - `SnapshotPersistence` - Save/load/clear of the current snapshot

mod file_snapshot_store;
mod in_memory_snapshot_store;
mod snapshot_persistence;

pub use file_snapshot_store::{is_valid_key, FileSnapshotStore, DEFAULT_MAX_SNAPSHOT_BYTES};
pub use in_memory_snapshot_store::InMemorySnapshotStore;
pub use snapshot_persistence::{SnapshotPersistence, DEFAULT_SNAPSHOT_KEY};
