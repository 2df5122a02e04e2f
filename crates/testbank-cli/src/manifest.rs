use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use testbank_core::error::TestbankError;

/// One entry in the manifest consumed by the test-player frontend:
/// output filename plus a human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub filename: String,
}

/// Insert or update the entry for `filename`.
///
/// An existing entry with the same filename gets its name replaced
/// instead of being duplicated. A missing or unreadable manifest starts
/// fresh rather than failing the batch.
pub fn update(path: &Path, filename: &str, display_name: &str) -> Result<(), TestbankError> {
    let mut entries = load(path);

    match entries.iter_mut().find(|e| e.filename == filename) {
        Some(entry) => entry.name = display_name.to_string(),
        None => entries.push(ManifestEntry {
            name: display_name.to_string(),
            filename: filename.to_string(),
        }),
    }

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(path, json).map_err(|e| TestbankError::Manifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn load(path: &Path) -> Vec<ManifestEntry> {
    fs::read(path)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_creates_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_manifest.json");

        update(&path, "mock-test-1.json", "mock test 1").unwrap();

        let entries = load(&path);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename, "mock-test-1.json");
        assert_eq!(entries[0].name, "mock test 1");
    }

    #[test]
    fn test_update_replaces_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_manifest.json");

        update(&path, "t.json", "old name").unwrap();
        update(&path, "t.json", "new name").unwrap();

        let entries = load(&path);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "new name");
    }

    #[test]
    fn test_update_appends_new_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_manifest.json");

        update(&path, "a.json", "a").unwrap();
        update(&path, "b.json", "b").unwrap();

        assert_eq!(load(&path).len(), 2);
    }

    #[test]
    fn test_corrupt_manifest_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_manifest.json");
        fs::write(&path, "{ not json").unwrap();

        update(&path, "a.json", "a").unwrap();
        assert_eq!(load(&path).len(), 1);
    }
}
