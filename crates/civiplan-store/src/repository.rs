//! In-memory directory over a loaded snapshot

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use civiplan_core::domain::{
    Department, Project, ProjectId, Resource, ResourceAllocation, ResourceId, Snapshot,
};
use civiplan_core::ports::{ProjectDirectory, ProjectFilter, ResourceDirectory};

use crate::snapshot_file::{load_snapshot, StoreError};

/// Serves the directory ports from a read-only snapshot
///
/// Queries preserve snapshot order, which is what makes detection passes
/// over the same snapshot deterministic end to end.
#[derive(Debug)]
pub struct SnapshotDirectory {
    snapshot: Snapshot,
}

impl SnapshotDirectory {
    /// Wraps an already-loaded snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Loads a snapshot export from disk
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(load_snapshot(path)?))
    }

    /// Returns the underlying snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl ProjectDirectory for SnapshotDirectory {
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>> {
        Ok(self
            .snapshot
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>> {
        Ok(self
            .snapshot
            .projects
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        Ok(self.snapshot.departments.clone())
    }
}

#[async_trait]
impl ResourceDirectory for SnapshotDirectory {
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.snapshot.resources.clone())
    }

    async fn list_allocations(&self) -> Result<Vec<ResourceAllocation>> {
        Ok(self.snapshot.allocations.clone())
    }

    async fn allocations_for_resource(&self, id: &ResourceId) -> Result<Vec<ResourceAllocation>> {
        Ok(self
            .snapshot
            .allocations
            .iter()
            .filter(|a| a.resource_id() == Some(id))
            .cloned()
            .collect())
    }
}
