//! Port definitions (trait interfaces for adapters)
//!
//! Ports define the seams between the core and the data-access adapters.
//! The core never talks to a backing store directly; adapter crates
//! implement these traits over whatever the deployment provides (a
//! document-store export, an in-memory fixture, ...).

pub mod directory;

pub use directory::{ProjectDirectory, ProjectFilter, ResourceDirectory};
