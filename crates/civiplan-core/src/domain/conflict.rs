//! Conflict domain types
//!
//! Conflicts are derived, never persisted: each detection pass recomputes
//! them from scratch out of the current snapshot, the presentation layer
//! renders them, and the next pass discards them. There is no conflict id,
//! no resolution state, and no lifecycle.

use serde::{Deserialize, Serialize};

use super::newtypes::{ProjectId, ResourceId};

/// A lightweight reference to a project embedded in a conflict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    id: ProjectId,
    title: String,
}

impl ProjectRef {
    /// Creates a project reference
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the project id
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project title
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Discriminant of a detected conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Two projects share a location with overlapping schedules
    LocationTimelineConflict,
    /// Concurrent allocations exceed a resource's capacity
    ResourceOverallocation,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConflictKind::LocationTimelineConflict => "location_timeline_conflict",
            ConflictKind::ResourceOverallocation => "resource_overallocation",
        };
        write!(f, "{}", s)
    }
}

/// A detected coordination conflict
///
/// Location conflicts are strictly pairwise: three mutually overlapping
/// projects at one site yield three conflicts, not one merged record.
/// Dashboard badge counts depend on that, so it is a contract, not an
/// implementation detail. Overallocations are the opposite shape: one
/// record per transitively-overlapping allocation group, so a group's
/// total is only ever counted against capacity once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Conflict {
    /// Two projects scheduled at the same location with overlapping dates
    LocationTimelineConflict {
        /// The shared location label
        location: String,
        /// The conflicting pair, in snapshot order
        projects: Vec<ProjectRef>,
    },
    /// A group of concurrent allocations exceeding a resource's capacity
    ResourceOverallocation {
        /// The overallocated resource
        resource_id: ResourceId,
        /// Its display name
        resource_name: String,
        /// Sum of the group's allocated quantities
        allocated_quantity: u32,
        /// The resource's capacity
        total_quantity: u32,
        /// Contributing projects, deduplicated, in allocation order
        project_ids: Vec<ProjectId>,
    },
}

impl Conflict {
    /// Creates a pairwise location/timeline conflict
    pub fn location_timeline(
        location: impl Into<String>,
        first: ProjectRef,
        second: ProjectRef,
    ) -> Self {
        Conflict::LocationTimelineConflict {
            location: location.into(),
            projects: vec![first, second],
        }
    }

    /// Creates a resource overallocation conflict
    pub fn resource_overallocation(
        resource_id: ResourceId,
        resource_name: impl Into<String>,
        allocated_quantity: u32,
        total_quantity: u32,
        project_ids: Vec<ProjectId>,
    ) -> Self {
        Conflict::ResourceOverallocation {
            resource_id,
            resource_name: resource_name.into(),
            allocated_quantity,
            total_quantity,
            project_ids,
        }
    }

    /// Returns the conflict discriminant
    pub fn kind(&self) -> ConflictKind {
        match self {
            Conflict::LocationTimelineConflict { .. } => ConflictKind::LocationTimelineConflict,
            Conflict::ResourceOverallocation { .. } => ConflictKind::ResourceOverallocation,
        }
    }

    /// Returns a one-line human description for list rendering
    pub fn describe(&self) -> String {
        match self {
            Conflict::LocationTimelineConflict { location, .. } => format!(
                "Multiple projects scheduled at {} with overlapping timelines",
                location
            ),
            Conflict::ResourceOverallocation {
                resource_name,
                allocated_quantity,
                total_quantity,
                ..
            } => format!(
                "{} overallocated: {} reserved against a capacity of {}",
                resource_name, allocated_quantity, total_quantity
            ),
        }
    }
}
