//! Directory ports (driven/secondary ports)
//!
//! These traits define read access to the coordination data set.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because access errors are adapter-specific
//!   (snapshot file, network store, ...) and don't need domain-level
//!   classification.
//! - The `ProjectFilter` struct provides a composable query mechanism
//!   without exposing storage implementation details; `matches` lets
//!   in-memory adapters apply it directly.
//! - All methods return owned records: snapshots are cheap copies and the
//!   callers hold them across detection passes.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{
    Department, DepartmentId, Project, ProjectId, ProjectStatus, Resource, ResourceAllocation,
    ResourceId,
};

/// Filter criteria for querying projects
///
/// All fields are optional; when unset, no filtering is applied for that
/// field. Multiple criteria combine with AND logic.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Keep only projects with this status
    pub status: Option<ProjectStatus>,
    /// Keep only projects this department leads or collaborates on
    pub department: Option<DepartmentId>,
    /// Case-insensitive substring match over title and location
    pub search: Option<String>,
    /// Keep only projects involving more than one department
    pub inter_departmental_only: bool,
}

impl ProjectFilter {
    /// Creates an empty filter (matches all projects)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status criterion
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the department criterion
    #[must_use]
    pub fn with_department(mut self, department: DepartmentId) -> Self {
        self.department = Some(department);
        self
    }

    /// Sets the search text criterion
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts to inter-departmental projects
    #[must_use]
    pub fn inter_departmental(mut self) -> Self {
        self.inter_departmental_only = true;
        self
    }

    /// Returns true if the project satisfies every set criterion
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status() != status {
                return false;
            }
        }

        if let Some(ref department) = self.department {
            if !project.involves_department(department) {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let in_title = project.title().to_lowercase().contains(&needle);
            let in_location = project
                .location()
                .map(|l| l.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_title && !in_location {
                return false;
            }
        }

        if self.inter_departmental_only && !project.is_inter_departmental() {
            return false;
        }

        true
    }
}

/// Read access to projects and departments
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Lists projects matching the filter, in stable snapshot order
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>>;

    /// Fetches a single project by id
    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>>;

    /// Lists all departments
    async fn list_departments(&self) -> Result<Vec<Department>>;
}

/// Read access to resources and their allocations
#[async_trait]
pub trait ResourceDirectory: Send + Sync {
    /// Lists all resources, in stable snapshot order
    async fn list_resources(&self) -> Result<Vec<Resource>>;

    /// Lists all allocation records
    async fn list_allocations(&self) -> Result<Vec<ResourceAllocation>>;

    /// Lists the allocations reserving a given resource
    async fn allocations_for_resource(&self, id: &ResourceId) -> Result<Vec<ResourceAllocation>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_project() -> Project {
        Project::new(ProjectId::new("p1"), "Harbor dredging")
            .with_location("East Harbor")
            .with_status(ProjectStatus::Active)
            .with_lead_department(DepartmentId::new("dept-pw"))
            .with_collaborator(DepartmentId::new("dept-env"))
            .with_schedule(DateRange::new(date("2024-04-01"), date("2024-05-31")).unwrap())
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProjectFilter::new().matches(&sample_project()));
    }

    #[test]
    fn test_status_filter() {
        let filter = ProjectFilter::new().with_status(ProjectStatus::Active);
        assert!(filter.matches(&sample_project()));

        let filter = ProjectFilter::new().with_status(ProjectStatus::Completed);
        assert!(!filter.matches(&sample_project()));
    }

    #[test]
    fn test_department_filter_covers_lead_and_collaborators() {
        let project = sample_project();

        let lead = ProjectFilter::new().with_department(DepartmentId::new("dept-pw"));
        assert!(lead.matches(&project));

        let collaborator = ProjectFilter::new().with_department(DepartmentId::new("dept-env"));
        assert!(collaborator.matches(&project));

        let other = ProjectFilter::new().with_department(DepartmentId::new("dept-parks"));
        assert!(!other.matches(&project));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_location() {
        let project = sample_project();

        assert!(ProjectFilter::new().with_search("harbor").matches(&project));
        assert!(ProjectFilter::new().with_search("EAST").matches(&project));
        assert!(!ProjectFilter::new().with_search("bridge").matches(&project));
    }

    #[test]
    fn test_search_tolerates_missing_location() {
        let project = Project::new(ProjectId::new("p2"), "Sidewalk audit");
        assert!(ProjectFilter::new().with_search("sidewalk").matches(&project));
        assert!(!ProjectFilter::new().with_search("harbor").matches(&project));
    }

    #[test]
    fn test_inter_departmental_filter() {
        let solo = Project::new(ProjectId::new("p3"), "Signage refresh")
            .with_lead_department(DepartmentId::new("dept-pw"));

        let filter = ProjectFilter::new().inter_departmental();
        assert!(filter.matches(&sample_project()));
        assert!(!filter.matches(&solo));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = ProjectFilter::new()
            .with_status(ProjectStatus::Active)
            .with_search("harbor")
            .inter_departmental();
        assert!(filter.matches(&sample_project()));

        let filter = filter.with_department(DepartmentId::new("dept-parks"));
        assert!(!filter.matches(&sample_project()));
    }
}
