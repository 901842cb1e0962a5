//! Detection use case - wires the pure detector to the directory ports
//!
//! Pulls a fresh snapshot through the ports and runs one detection pass
//! over it. The caller decides when to re-run (on refresh, on a timer);
//! successive passes on independent snapshots are trivially safe and the
//! last result wins.

use std::sync::Arc;

use tracing::debug;

use civiplan_core::{
    domain::Snapshot,
    ports::{ProjectDirectory, ProjectFilter, ResourceDirectory},
};

use crate::detector::{ConflictDetector, DetectionReport};
use crate::error::DetectionError;

/// Runs detection passes over snapshots assembled from the directories
pub struct DetectConflictsUseCase {
    projects: Arc<dyn ProjectDirectory>,
    resources: Arc<dyn ResourceDirectory>,
    include_resources: bool,
}

impl DetectConflictsUseCase {
    pub fn new(
        projects: Arc<dyn ProjectDirectory>,
        resources: Arc<dyn ResourceDirectory>,
    ) -> Self {
        Self {
            projects,
            resources,
            include_resources: true,
        }
    }

    /// Restricts the pass to location/timeline detection only
    #[must_use]
    pub fn without_resources(mut self) -> Self {
        self.include_resources = false;
        self
    }

    /// Assembles a snapshot and runs one detection pass
    ///
    /// A failed fetch surfaces as an error here, before detection runs;
    /// callers must not render "no conflicts" for it.
    pub async fn execute(&self) -> Result<DetectionReport, DetectionError> {
        let projects = self.projects.list_projects(&ProjectFilter::new()).await?;

        let (resources, allocations) = if self.include_resources {
            (
                self.resources.list_resources().await?,
                self.resources.list_allocations().await?,
            )
        } else {
            (Vec::new(), Vec::new())
        };

        debug!(
            projects = projects.len(),
            resources = resources.len(),
            allocations = allocations.len(),
            "Assembled detection snapshot"
        );

        let snapshot = Snapshot {
            projects,
            departments: Vec::new(),
            resources,
            allocations,
        };

        Ok(ConflictDetector::detect_all(&snapshot))
    }
}
