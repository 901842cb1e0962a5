//! Domain entities and business logic
//!
//! This module contains the core domain types for Civiplan:
//! - Newtypes for type-safe identifiers
//! - Project, department, and resource entities
//! - Calendar scheduling types (date ranges, urgency bands)
//! - Derived conflict types produced by the detector
//! - Point-in-time snapshots of the coordination data set
//! - Domain-specific error types

pub mod conflict;
pub mod department;
pub mod errors;
pub mod newtypes;
pub mod project;
pub mod resource;
pub mod schedule;
pub mod snapshot;

// Re-export commonly used types
pub use conflict::{Conflict, ConflictKind, ProjectRef};
pub use department::Department;
pub use errors::DomainError;
pub use newtypes::{AllocationId, DepartmentId, ProjectId, ResourceId};
pub use project::{Project, ProjectStatus};
pub use resource::{Resource, ResourceAllocation, ResourceType};
pub use schedule::{DateRange, Urgency};
pub use snapshot::Snapshot;
