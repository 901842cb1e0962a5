//! CLI subcommand implementations

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use civiplan_core::config::Config;
use civiplan_store::{SnapshotDirectory, StoreError};

use crate::output::OutputFormatter;

pub mod config;
pub mod conflicts;
pub mod overview;
pub mod projects;
pub mod resources;
pub mod timeline;

/// Shared state resolved once in `main` and passed to every command
pub struct CommandContext {
    pub format: crate::output::OutputFormat,
    pub config: Config,
    pub snapshot_path: PathBuf,
}

impl CommandContext {
    /// Opens the snapshot export as a directory adapter
    ///
    /// A missing export is a user-facing condition, not a bug: print a
    /// pointer and return `None` so the command can exit cleanly. A
    /// present-but-broken export is an error.
    pub fn open_directory(
        &self,
        formatter: &dyn OutputFormatter,
    ) -> Result<Option<Arc<SnapshotDirectory>>> {
        match SnapshotDirectory::from_file(&self.snapshot_path) {
            Ok(directory) => Ok(Some(Arc::new(directory))),
            Err(StoreError::NotFound(path)) => {
                formatter.error(&format!(
                    "No snapshot export found at {}. Provide --snapshot or set snapshot.path in the config.",
                    path.display()
                ));
                Ok(None)
            }
            Err(err) => Err(err).context("Failed to load snapshot export"),
        }
    }
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(raw: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-06-01").is_ok());
        assert!(parse_date("06/01/2024").is_err());
        assert!(parse_date("soon").is_err());
    }
}
