//! Conflict detection logic
//!
//! Determines which projects collide on location and schedule, and which
//! resources are promised more than they have, from a read-only snapshot.
//!
//! Both passes share the same inclusive interval-overlap test. They differ
//! in shape on purpose: location conflicts are emitted once per unordered
//! pair and never merged (three mutually-overlapping projects at one site
//! yield three conflicts; dashboard counts depend on this), while
//! overallocation is computed once per transitively-overlapping allocation
//! group so a group's total is never counted against capacity twice.
//!
//! The location pass is O(n²) in the number of projects. That is fine at
//! municipal scale (tens to low hundreds of concurrent projects) but will
//! not stretch to large n; a sweep-line or location-bucketed variant is
//! the known follow-up if it ever has to.

use std::collections::HashMap;

use tracing::{debug, info};

use civiplan_core::domain::{
    Conflict, DateRange, Project, ProjectId, ProjectRef, Resource, ResourceAllocation, ResourceId,
    Snapshot,
};

use crate::clusters::cluster_overlapping;

/// Outcome of a full detection pass
///
/// Recomputed from scratch every pass; nothing here is persisted. For a
/// given snapshot the report is identical across runs, conflicts in the
/// same order, so it can key UI lists directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetectionReport {
    /// Location conflicts first, then overallocations
    pub conflicts: Vec<Conflict>,
    /// Project records excluded for missing location or dates
    pub skipped_projects: usize,
    /// Allocation records excluded for missing fields or unknown resources
    pub skipped_allocations: usize,
}

impl DetectionReport {
    /// Returns true if the pass found no conflicts
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Detects scheduling conflicts and resource overallocations
///
/// Stateless; every operation is a pure function of its arguments.
pub struct ConflictDetector;

impl ConflictDetector {
    /// Finds pairwise location/timeline conflicts
    ///
    /// Projects missing a location or a well-formed date range are
    /// excluded up front and never conflict. Every remaining unordered
    /// pair is considered exactly once, in snapshot order; a pair
    /// conflicts when the locations are equal (case-sensitive) and the
    /// closed date ranges overlap.
    #[must_use]
    pub fn detect_location_conflicts(projects: &[Project]) -> Vec<Conflict> {
        Self::scan_locations(projects).0
    }

    fn scan_locations(projects: &[Project]) -> (Vec<Conflict>, usize) {
        let comparable: Vec<(&Project, &str, DateRange)> = projects
            .iter()
            .filter_map(|project| {
                let location = project.location();
                let schedule = project.schedule();
                match (location, schedule) {
                    (Some(location), Some(schedule)) => Some((project, location, schedule)),
                    _ => {
                        debug!(
                            project = %project.id(),
                            "Skipping project without location or schedule"
                        );
                        None
                    }
                }
            })
            .collect();

        let skipped = projects.len() - comparable.len();
        let mut conflicts = Vec::new();

        for i in 0..comparable.len() {
            for j in (i + 1)..comparable.len() {
                let (a, a_location, a_range) = comparable[i];
                let (b, b_location, b_range) = comparable[j];

                if a_location == b_location && a_range.overlaps(&b_range) {
                    conflicts.push(Conflict::location_timeline(
                        a_location,
                        ProjectRef::new(a.id().clone(), a.title()),
                        ProjectRef::new(b.id().clone(), b.title()),
                    ));
                }
            }
        }

        (conflicts, skipped)
    }

    /// Finds resources whose concurrent allocations exceed capacity
    ///
    /// Allocations are grouped by resource, then swept into
    /// transitive-overlap groups; each group's quantities are summed once
    /// and compared against the resource's capacity. One conflict per
    /// over-capacity group, resources in snapshot order. Allocations
    /// missing required fields or referencing unknown resources are
    /// excluded.
    #[must_use]
    pub fn detect_resource_overallocation(
        resources: &[Resource],
        allocations: &[ResourceAllocation],
    ) -> Vec<Conflict> {
        Self::scan_resources(resources, allocations).0
    }

    fn scan_resources(
        resources: &[Resource],
        allocations: &[ResourceAllocation],
    ) -> (Vec<Conflict>, usize) {
        let mut skipped = 0;
        let mut by_resource: HashMap<&ResourceId, Vec<&ResourceAllocation>> = HashMap::new();

        for allocation in allocations {
            if !allocation.is_comparable() {
                debug!(
                    allocation = %allocation.id(),
                    "Skipping allocation with missing fields"
                );
                skipped += 1;
                continue;
            }
            // is_comparable guarantees the id is present
            if let Some(resource_id) = allocation.resource_id() {
                by_resource.entry(resource_id).or_default().push(allocation);
            }
        }

        let mut conflicts = Vec::new();

        for resource in resources {
            let Some(group) = by_resource.remove(resource.id()) else {
                continue;
            };

            let ranged: Vec<(DateRange, &ResourceAllocation)> = group
                .into_iter()
                .filter_map(|a| a.window().map(|w| (w, a)))
                .collect();

            for cluster in cluster_overlapping(ranged) {
                let total: u32 = cluster
                    .items
                    .iter()
                    .filter_map(|(_, a)| a.allocated_quantity())
                    .sum();

                if total <= resource.total_quantity() {
                    continue;
                }

                let mut project_ids: Vec<ProjectId> = Vec::new();
                for (_, allocation) in &cluster.items {
                    if let Some(project_id) = allocation.project_id() {
                        if !project_ids.contains(project_id) {
                            project_ids.push(project_id.clone());
                        }
                    }
                }

                conflicts.push(Conflict::resource_overallocation(
                    resource.id().clone(),
                    resource.name(),
                    total,
                    resource.total_quantity(),
                    project_ids,
                ));
            }
        }

        // Whatever is left references resources absent from the snapshot
        for (resource_id, orphaned) in by_resource {
            debug!(
                resource = %resource_id,
                count = orphaned.len(),
                "Skipping allocations for unknown resource"
            );
            skipped += orphaned.len();
        }

        (conflicts, skipped)
    }

    /// Runs both passes over a snapshot
    ///
    /// Location conflicts first, then overallocations. Deterministic for a
    /// given snapshot: identical list, identical order, across runs.
    #[must_use]
    pub fn detect_all(snapshot: &Snapshot) -> DetectionReport {
        let (mut conflicts, skipped_projects) = Self::scan_locations(&snapshot.projects);
        let (resource_conflicts, skipped_allocations) =
            Self::scan_resources(&snapshot.resources, &snapshot.allocations);
        conflicts.extend(resource_conflicts);

        info!(
            conflicts = conflicts.len(),
            skipped_projects,
            skipped_allocations,
            "Detection pass complete"
        );

        DetectionReport {
            conflicts,
            skipped_projects,
            skipped_allocations,
        }
    }
}
