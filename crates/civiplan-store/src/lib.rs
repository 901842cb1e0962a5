//! Civiplan Store - snapshot-file directory adapter
//!
//! Implements the core directory ports over a JSON export of the hosted
//! document store. The export is loaded once into memory; queries are
//! served from that read-only copy. Loading failures are typed so callers
//! can tell "the snapshot could not be fetched" apart from "the snapshot
//! is empty"; the detector cannot make that distinction once it receives
//! an empty set.

pub mod repository;
pub mod snapshot_file;

pub use repository::SnapshotDirectory;
pub use snapshot_file::{load_snapshot, save_snapshot, StoreError};
