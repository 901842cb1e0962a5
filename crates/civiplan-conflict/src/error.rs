//! Error types for the detection use case
//!
//! The detector itself never fails: malformed records are skipped and an
//! empty snapshot is a valid input. Errors only arise around it, when the
//! directory adapters cannot supply a snapshot.

use thiserror::Error;

/// Errors that can occur while assembling a detection pass
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The directory adapter failed to supply records
    #[error("snapshot access failed: {0}")]
    Storage(#[from] anyhow::Error),
}
