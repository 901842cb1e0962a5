//! Conflicts command - run detection over the snapshot export
//!
//! Provides the `civiplan conflicts` command, which loads the snapshot,
//! runs a full detection pass, and lists every conflict found along with
//! the records the pass had to skip.

use anyhow::Result;
use clap::Args;
use tracing::info;

use civiplan_conflict::DetectConflictsUseCase;
use civiplan_core::domain::Conflict;

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct ConflictsCommand {
    /// Only check project locations and timelines, skip resources
    #[arg(long)]
    locations_only: bool,
}

impl ConflictsCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let directory = match ctx.open_directory(&*formatter)? {
            Some(directory) => directory,
            None => return Ok(()),
        };

        let mut use_case = DetectConflictsUseCase::new(directory.clone(), directory);
        if self.locations_only || !ctx.config.detection.include_resources {
            use_case = use_case.without_resources();
        }

        let report = use_case.execute().await?;

        info!(count = report.conflicts.len(), "Detection pass finished");

        if matches!(ctx.format, crate::output::OutputFormat::Json) {
            let json = serde_json::json!({
                "count": report.conflicts.len(),
                "skipped_projects": report.skipped_projects,
                "skipped_allocations": report.skipped_allocations,
                "conflicts": report.conflicts,
            });
            formatter.print_json(&json);
            return Ok(());
        }

        if report.skipped_projects > 0 || report.skipped_allocations > 0 {
            formatter.warn(&format!(
                "Skipped {} project record(s) and {} allocation record(s) with missing fields",
                report.skipped_projects, report.skipped_allocations
            ));
        }

        if report.is_clean() {
            formatter.success("No conflicts detected");
            formatter.info(
                "All resource allocations and project timelines are properly coordinated.",
            );
            return Ok(());
        }

        formatter.success(&format!(
            "{} conflict{} detected",
            report.conflicts.len(),
            if report.conflicts.len() == 1 { "" } else { "s" }
        ));
        formatter.info("");

        for (index, conflict) in report.conflicts.iter().enumerate() {
            formatter.info(&format!("{}. {}", index + 1, conflict.describe()));
            match conflict {
                Conflict::LocationTimelineConflict { projects, .. } => {
                    for project in projects {
                        formatter.info(&format!("     - {} ({})", project.title(), project.id()));
                    }
                }
                Conflict::ResourceOverallocation { project_ids, .. } => {
                    for project_id in project_ids {
                        formatter.info(&format!("     - project {}", project_id));
                    }
                }
            }
        }

        Ok(())
    }
}
