//! Point-in-time snapshots of the coordination data set
//!
//! A snapshot is a read-only copy of every collection the detector and the
//! dashboard use cases consume. The calling layer is responsible for
//! obtaining it (document-store export, test fixture, ...); nothing in the
//! core mutates one.

use serde::{Deserialize, Serialize};

use super::department::Department;
use super::project::Project;
use super::resource::{Resource, ResourceAllocation};

/// A read-only copy of the four record collections
///
/// All collections default to empty so a partial export still loads; an
/// empty snapshot is valid input everywhere and yields empty results,
/// never errors. Callers must distinguish "the store gave us nothing"
/// from "the fetch failed" before building one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Project records
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Department records
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Resource records
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Resource allocation records
    #[serde(default)]
    pub allocations: Vec<ResourceAllocation>,
}

impl Snapshot {
    /// Returns true if every collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.departments.is_empty()
            && self.resources.is_empty()
            && self.allocations.is_empty()
    }
}
