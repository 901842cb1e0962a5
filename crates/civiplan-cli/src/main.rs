//! Civiplan CLI - Command-line interface for Civiplan
//!
//! Provides commands for:
//! - Dashboard overview statistics
//! - Running conflict detection over a snapshot export
//! - Viewing the project timeline
//! - Checking resource utilization
//! - Listing and filtering projects
//! - Viewing and initializing configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{
    config::ConfigCommand, conflicts::ConflictsCommand, overview::OverviewCommand,
    projects::ProjectsCommand, resources::ResourcesCommand, timeline::TimelineCommand,
    CommandContext,
};
use output::OutputFormat;

use civiplan_core::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "civiplan",
    version,
    about = "Inter-departmental municipal project coordination"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use alternate snapshot export
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show dashboard statistics
    Overview(OverviewCommand),
    /// Detect scheduling conflicts and resource overallocations
    Conflicts(ConflictsCommand),
    /// Show the chronological project timeline
    Timeline(TimelineCommand),
    /// Show resource utilization
    Resources(ResourcesCommand),
    /// List projects
    Projects(ProjectsCommand),
    /// View and manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;

    // Setup tracing; -v overrides the configured level
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let snapshot_path = cli
        .snapshot
        .unwrap_or_else(|| config.snapshot.path.clone());

    let ctx = CommandContext {
        format,
        config,
        snapshot_path,
    };

    match cli.command {
        Commands::Overview(cmd) => cmd.execute(&ctx).await,
        Commands::Conflicts(cmd) => cmd.execute(&ctx).await,
        Commands::Timeline(cmd) => cmd.execute(&ctx).await,
        Commands::Resources(cmd) => cmd.execute(&ctx).await,
        Commands::Projects(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx).await,
    }
}
