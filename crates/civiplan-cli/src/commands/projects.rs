//! Projects command - list and filter the project register

use anyhow::Result;
use clap::Args;

use civiplan_core::domain::{DepartmentId, ProjectStatus};
use civiplan_core::ports::{ProjectDirectory, ProjectFilter};

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Only show projects with this status (planning, active, delayed, completed)
    #[arg(long)]
    status: Option<String>,

    /// Only show projects this department leads or collaborates on
    #[arg(long)]
    department: Option<String>,

    /// Case-insensitive search over title and location
    #[arg(long)]
    search: Option<String>,

    /// Only show projects involving more than one department
    #[arg(long)]
    inter_departmental: bool,
}

impl ProjectsCommand {
    fn build_filter(&self) -> Result<ProjectFilter> {
        let mut filter = ProjectFilter::new();

        if let Some(ref raw) = self.status {
            let status: ProjectStatus = raw
                .parse()
                .map_err(|err: civiplan_core::domain::DomainError| anyhow::anyhow!(err))?;
            filter = filter.with_status(status);
        }
        if let Some(ref department) = self.department {
            filter = filter.with_department(DepartmentId::from(department.as_str()));
        }
        if let Some(ref search) = self.search {
            filter = filter.with_search(search.clone());
        }
        if self.inter_departmental {
            filter = filter.inter_departmental();
        }

        Ok(filter)
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let directory = match ctx.open_directory(&*formatter)? {
            Some(directory) => directory,
            None => return Ok(()),
        };

        let filter = self.build_filter()?;
        let projects = directory.list_projects(&filter).await?;

        if matches!(ctx.format, crate::output::OutputFormat::Json) {
            formatter.print_json(&serde_json::to_value(&projects)?);
            return Ok(());
        }

        if projects.is_empty() {
            formatter.success("No projects match");
            return Ok(());
        }

        formatter.success(&format!(
            "{} project{}",
            projects.len(),
            if projects.len() == 1 { "" } else { "s" }
        ));
        formatter.info("");

        for project in &projects {
            let schedule = match (project.start_date(), project.end_date()) {
                (Some(start), Some(end)) => format!("{} .. {}", start, end),
                (Some(start), None) => format!("{} .. ?", start),
                (None, Some(end)) => format!("? .. {}", end),
                (None, None) => "unscheduled".to_string(),
            };
            formatter.info(&format!(
                "{:<24} {:<10} {:<24} {}",
                project.title(),
                project.status().to_string(),
                schedule,
                project.location().unwrap_or("-")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_rejects_unknown_status() {
        let cmd = ProjectsCommand {
            status: Some("paused".to_string()),
            department: None,
            search: None,
            inter_departmental: false,
        };
        assert!(cmd.build_filter().is_err());
    }

    #[test]
    fn test_build_filter_combines_flags() {
        let cmd = ProjectsCommand {
            status: Some("active".to_string()),
            department: Some("dept-1".to_string()),
            search: Some("bridge".to_string()),
            inter_departmental: true,
        };
        let filter = cmd.build_filter().unwrap();
        assert_eq!(filter.status, Some(ProjectStatus::Active));
        assert!(filter.inter_departmental_only);
        assert_eq!(filter.search.as_deref(), Some("bridge"));
    }
}
