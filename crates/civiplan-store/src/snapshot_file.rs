//! Snapshot file loading and saving

use std::path::{Path, PathBuf};

use tracing::debug;

use civiplan_core::domain::Snapshot;

/// Errors raised while reading or writing a snapshot file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot file does not exist
    #[error("snapshot file not found: {0}")]
    NotFound(PathBuf),

    /// The snapshot file could not be read or written
    #[error("snapshot file error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not a valid export
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a snapshot from a JSON export
///
/// Individual records with missing or malformed optional fields load fine
/// (the domain types are lenient); only a structurally invalid document
/// fails. A missing file is reported as `NotFound` rather than a bare I/O
/// error so the CLI can suggest where the export should live.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&contents)?;

    debug!(
        path = %path.display(),
        projects = snapshot.projects.len(),
        departments = snapshot.departments.len(),
        resources = snapshot.resources.len(),
        allocations = snapshot.allocations.len(),
        "Loaded snapshot"
    );

    Ok(snapshot)
}

/// Writes a snapshot as a pretty-printed JSON export
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export").join("snapshot.json");

        let snapshot: Snapshot = serde_json::from_str(
            r#"{"projects": [{"id": "p1", "title": "Road work"}]}"#,
        )
        .unwrap();
        save_snapshot(&snapshot, &path).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }
}
