//! Dashboard overview use case
//!
//! Produces the four stat cards on the coordination dashboard: active
//! projects, registered departments, open conflicts, and budget
//! utilization. The conflict count is supplied by the caller, which runs
//! the detector over the same snapshot first; conflicts are never stored,
//! so there is no flag on the records to count.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Project, ProjectStatus};
use crate::ports::{ProjectDirectory, ProjectFilter};

/// Aggregated dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    /// Projects currently in progress
    pub active_projects: usize,
    /// All projects in the snapshot
    pub total_projects: usize,
    /// Registered departments
    pub departments: usize,
    /// Conflicts found by the latest detection pass
    pub conflicts: usize,
    /// Percent of allocated budget spent, rounded; 0 when nothing allocated
    pub budget_utilization_percent: u32,
}

/// Percent of allocated budget spent across all projects
///
/// Projects without budget figures contribute nothing to either sum.
#[must_use]
pub fn budget_utilization_percent(projects: &[Project]) -> u32 {
    let used: f64 = projects.iter().filter_map(Project::budget_used).sum();
    let allocated: f64 = projects.iter().filter_map(Project::budget_allocated).sum();

    if allocated <= 0.0 {
        return 0;
    }
    (used / allocated * 100.0).round() as u32
}

/// Builds the dashboard overview from the project directory
pub struct OverviewUseCase {
    projects: Arc<dyn ProjectDirectory>,
}

impl OverviewUseCase {
    pub fn new(projects: Arc<dyn ProjectDirectory>) -> Self {
        Self { projects }
    }

    /// Computes the overview; `conflict_count` comes from the detection
    /// pass the caller ran over the same snapshot
    pub async fn execute(&self, conflict_count: usize) -> Result<DashboardOverview> {
        let projects = self.projects.list_projects(&ProjectFilter::new()).await?;
        let departments = self.projects.list_departments().await?;

        let active = projects
            .iter()
            .filter(|p| p.status() == ProjectStatus::Active)
            .count();

        debug!(
            projects = projects.len(),
            departments = departments.len(),
            "Computed dashboard overview"
        );

        Ok(DashboardOverview {
            active_projects: active,
            total_projects: projects.len(),
            departments: departments.len(),
            conflicts: conflict_count,
            budget_utilization_percent: budget_utilization_percent(&projects),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectId;

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project::new(ProjectId::new(id), id.to_string()).with_status(status)
    }

    #[test]
    fn test_budget_utilization_rounds() {
        let projects = vec![
            project("a", ProjectStatus::Active).with_budget(30_000.0, 10_000.0),
            project("b", ProjectStatus::Planning).with_budget(70_000.0, 23_000.0),
        ];
        // 33000 / 100000 = 33%
        assert_eq!(budget_utilization_percent(&projects), 33);
    }

    #[test]
    fn test_budget_utilization_without_budgets() {
        let projects = vec![project("a", ProjectStatus::Active)];
        assert_eq!(budget_utilization_percent(&projects), 0);
    }

    #[test]
    fn test_budget_utilization_ignores_unbudgeted_projects() {
        let projects = vec![
            project("a", ProjectStatus::Active).with_budget(50_000.0, 50_000.0),
            project("b", ProjectStatus::Active),
        ];
        assert_eq!(budget_utilization_percent(&projects), 100);
    }
}
