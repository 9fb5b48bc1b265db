//! Snapshot files — saved project data for offline aggregation.
//!
//! A snapshot file is the pretty-printed JSON of a `ProjectSnapshot`. The
//! summary/export commands read one of these instead of the network, so
//! aggregation works without the backend reachable.

use std::path::Path;

use super::source::{ApiError, ProjectSnapshot};

/// Writes `snapshot` as pretty-printed JSON at `path`.
pub fn save_snapshot(path: &Path, snapshot: &ProjectSnapshot) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| ApiError::SnapshotIo(format!("serialize snapshot: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| ApiError::SnapshotIo(format!("write {}: {e}", path.display())))?;
    Ok(())
}

/// Reads a snapshot saved by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<ProjectSnapshot, ApiError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ApiError::SnapshotIo(format!("read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| ApiError::SnapshotIo(format!("parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_snapshot;

    #[test]
    fn snapshot_roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let snapshot = demo_snapshot();
        save_snapshot(&path, &snapshot).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded.project_id, snapshot.project_id);
        assert_eq!(loaded.materials.len(), snapshot.materials.len());
        assert_eq!(loaded.labour.len(), snapshot.labour.len());
        assert_eq!(
            loaded.materials[0].total_price,
            snapshot.materials[0].total_price
        );
    }

    #[test]
    fn missing_file_reports_snapshot_io() {
        let err = load_snapshot(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, ApiError::SnapshotIo(_)));
    }

    #[test]
    fn garbage_file_reports_snapshot_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, ApiError::SnapshotIo(_)));
    }
}
