//! Civiplan Conflict - Conflict detection
//!
//! Provides:
//! - Pairwise location/timeline conflict detection over project snapshots
//! - Resource overallocation detection via interval clustering
//! - A use case wiring the pure detector to the directory ports
//!
//! The detector is a pure function of its input snapshot: no I/O, no
//! internal state, no side effects beyond tracing. Malformed records are
//! skipped and counted, never fatal.

pub mod clusters;
pub mod detector;
pub mod error;
pub mod use_cases;

pub use detector::{ConflictDetector, DetectionReport};
pub use error::DetectionError;
pub use use_cases::DetectConflictsUseCase;
