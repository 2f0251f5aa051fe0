//! JSON file task store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::TaskStore;
use crate::error::StoreError;
use crate::task::Task;

/// Task collection stored as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Write `contents` next to the target, then rename over it.
    fn replace(&self, contents: &str) -> Result<(), StoreError> {
        self.ensure_parent()?;
        let tmp = self.temp_path();
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Task file missing, creating empty collection");
            self.replace("[]")?;
        }

        let data = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&data)?;
        debug!(count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(tasks)?;
        self.replace(&data)?;
        debug!(count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        vec![
            Task { id: 1_700_000_000_000, title: "Buy milk".into(), completed: false },
            Task { id: 1_700_000_000_001, title: "Walk dog".into(), completed: true },
        ]
    }

    #[test]
    fn load_creates_missing_file_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));

        assert!(store.load().unwrap().is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn load_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data/tasks.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_of_load_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));
        store.save(&sample()).unwrap();
        let before: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

        store.save(&store.load().unwrap()).unwrap();

        let after: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));
        store.save(&sample()[..1]).unwrap();

        let expected = "[\n  {\n    \"id\": 1700000000000,\n    \"title\": \"Buy milk\",\n    \"completed\": false\n  }\n]";
        assert_eq!(fs::read_to_string(store.path()).unwrap(), expected);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn wrong_shape_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"id": "x", "title": 3}]"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
