//! Timeline command - chronological project start/end entries

use anyhow::Result;
use clap::Args;

use civiplan_core::domain::{DepartmentId, Urgency};
use civiplan_core::usecases::{TimelineEvent, TimelineUseCase};

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct TimelineCommand {
    /// Only show projects this department leads or collaborates on
    #[arg(long)]
    department: Option<String>,
}

impl TimelineCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let directory = match ctx.open_directory(&*formatter)? {
            Some(directory) => directory,
            None => return Ok(()),
        };

        let today = chrono::Local::now().date_naive();
        let department = self.department.as_deref().map(DepartmentId::from);

        let use_case = TimelineUseCase::new(directory, ctx.config.timeline.clone());
        let entries = use_case.execute(department, today).await?;

        if matches!(ctx.format, crate::output::OutputFormat::Json) {
            formatter.print_json(&serde_json::to_value(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            formatter.success("No scheduled projects");
            return Ok(());
        }

        formatter.success(&format!("{} timeline entries", entries.len()));
        formatter.info("");

        for entry in &entries {
            let marker = match entry.event {
                TimelineEvent::ProjectStart => "starts",
                TimelineEvent::ProjectEnd => "ends  ",
            };
            let badge = match entry.urgency {
                Some(Urgency::Overdue) => "  [overdue]",
                Some(Urgency::DueSoon) => "  [due soon]",
                Some(Urgency::ThisWeek) => "  [this week]",
                _ => "",
            };
            formatter.info(&format!(
                "{}  {}  {}{}",
                entry.date,
                marker,
                entry.project.title(),
                badge
            ));
        }

        Ok(())
    }
}
