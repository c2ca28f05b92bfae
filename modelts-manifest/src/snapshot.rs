//! Loading model snapshots exported by the host application.

use std::path::Path;

use modelts_ir::Snapshot;

use crate::{Error, Result, error::SourceContext};

/// Read and parse a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_snapshot(&content, &path.display().to_string())
}

/// Parse a snapshot from a string with a filename for error reporting.
pub fn parse_snapshot(content: &str, filename: &str) -> Result<Snapshot> {
    let ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| ctx.snapshot_error(e))
}

#[cfg(test)]
mod tests {
    use modelts_ir::ClassName;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot(
            r#"{ "classes": { "App\\Models\\User": { "path": "app/Models/User.php" } } }"#,
            "snapshot.json",
        )
        .unwrap();

        assert!(snapshot.classes.contains_key(&ClassName::new("App\\Models\\User")));
        assert!(snapshot.enums.is_empty());
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = parse_snapshot(r#"{ "classes": { "A": { "parents": 3 } } }"#, "snapshot.json")
            .unwrap_err();
        assert!(matches!(*err, Error::Snapshot { .. }));
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_snapshot(temp.path().join("snapshot.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
