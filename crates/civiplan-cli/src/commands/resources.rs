//! Resources command - per-resource utilization table

use anyhow::Result;
use clap::Args;

use civiplan_core::usecases::UtilizationUseCase;

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct ResourcesCommand {
    /// Day to report utilization for (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::commands::parse_date)]
    as_of: Option<chrono::NaiveDate>,
}

impl ResourcesCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let directory = match ctx.open_directory(&*formatter)? {
            Some(directory) => directory,
            None => return Ok(()),
        };

        let day = self
            .as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let usages = UtilizationUseCase::new(directory).execute(day).await?;

        if matches!(ctx.format, crate::output::OutputFormat::Json) {
            let json = serde_json::json!({
                "as_of": day,
                "resources": usages,
            });
            formatter.print_json(&json);
            return Ok(());
        }

        if usages.is_empty() {
            formatter.success("No resources in the snapshot");
            return Ok(());
        }

        formatter.success(&format!("Resource utilization as of {}", day));
        formatter.info("");
        formatter.info(&format!(
            "{:<28} {:<10} {:>8} {:>9} {:>9}  {}",
            "Resource", "Type", "Capacity", "Allocated", "Available", "Status"
        ));

        for usage in &usages {
            formatter.info(&format!(
                "{:<28} {:<10} {:>8} {:>9} {:>9}  {} ({}%)",
                usage.name,
                usage.kind.to_string(),
                usage.total_quantity,
                usage.allocated,
                usage.available,
                usage.availability,
                usage.percent
            ));
        }

        Ok(())
    }
}
