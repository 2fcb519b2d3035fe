//! Loading measurement snapshots from disk.

use std::path::Path;

use shared::AreaMeasurementData;

/// Read a snapshot JSON file
pub fn load_snapshot(path: &Path) -> Result<AreaMeasurementData, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read snapshot {}: {e}", path.display()))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse snapshot {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("area-panel-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_snapshot() {
        let path = temp_file("ok.json", r#"{"points": [{"x": 0, "y": 1, "z": 0}], "area": 2.5}"#);
        let data = load_snapshot(&path).unwrap();
        assert_eq!(data.point_count(), 1);
        assert_eq!(data.area, Some(2.5));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_snapshot_parse_error() {
        let path = temp_file("bad.json", "[1, 2");
        let err = load_snapshot(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse snapshot"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/area-panel/snapshot.json")).unwrap_err();
        assert!(err.starts_with("Failed to read snapshot"));
    }
}
