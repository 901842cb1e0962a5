//! Overview command - dashboard statistics

use anyhow::Result;
use clap::Args;

use civiplan_conflict::DetectConflictsUseCase;
use civiplan_core::usecases::OverviewUseCase;

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct OverviewCommand {}

impl OverviewCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let directory = match ctx.open_directory(&*formatter)? {
            Some(directory) => directory,
            None => return Ok(()),
        };

        // Conflicts are computed live; nothing on the records stores them
        let mut detection = DetectConflictsUseCase::new(directory.clone(), directory.clone());
        if !ctx.config.detection.include_resources {
            detection = detection.without_resources();
        }
        let report = detection.execute().await?;

        let overview = OverviewUseCase::new(directory)
            .execute(report.conflicts.len())
            .await?;

        if matches!(ctx.format, crate::output::OutputFormat::Json) {
            formatter.print_json(&serde_json::to_value(&overview)?);
            return Ok(());
        }

        formatter.success("Coordination overview");
        formatter.info("");
        formatter.info(&format!(
            "Active Projects       {:>6}   Currently in progress",
            overview.active_projects
        ));
        formatter.info(&format!(
            "Total Projects        {:>6}",
            overview.total_projects
        ));
        formatter.info(&format!(
            "Departments           {:>6}   Total registered",
            overview.departments
        ));
        formatter.info(&format!(
            "Conflicts             {:>6}   Requiring attention",
            overview.conflicts
        ));
        formatter.info(&format!(
            "Budget Utilization    {:>5}%   Of allocated budget",
            overview.budget_utilization_percent
        ));

        if overview.conflicts > 0 {
            formatter.info("");
            formatter.info("Run 'civiplan conflicts' for details.");
        }

        Ok(())
    }
}
