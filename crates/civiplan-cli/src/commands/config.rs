//! Config command - view and initialize configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use civiplan_core::config::Config;

use crate::commands::CommandContext;
use crate::output::get_formatter;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show(ShowArgs),
    /// Write a default configuration file
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the file (defaults to the user config directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        match self {
            ConfigCommand::Show(_) => {
                if matches!(ctx.format, crate::output::OutputFormat::Json) {
                    formatter.print_json(&serde_json::to_value(&ctx.config)?);
                    return Ok(());
                }

                let yaml = serde_yaml::to_string(&ctx.config)
                    .context("Failed to render configuration")?;
                formatter.success("Effective configuration");
                for line in yaml.lines() {
                    formatter.info(line);
                }
                Ok(())
            }
            ConfigCommand::Init(args) => {
                let path = args
                    .path
                    .clone()
                    .unwrap_or_else(Config::default_path);

                if path.exists() && !args.force {
                    formatter.error(&format!(
                        "{} already exists; pass --force to overwrite",
                        path.display()
                    ));
                    return Ok(());
                }

                Config::default()
                    .save(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;

                formatter.success(&format!("Wrote default configuration to {}", path.display()));
                Ok(())
            }
        }
    }
}
