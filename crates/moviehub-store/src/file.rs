use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::storage::Storage;

/// One `<key>.json` file per key under the store root.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStorage::new(dir.path());
        assert!(store.get_item("missing").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileStorage::new(dir.path());

        store.set_item("members", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            store.get_item("members").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert!(dir.path().join("members.json").exists());
    }

    #[test]
    fn test_set_creates_root() {
        let dir = TempDir::new().unwrap();
        let store = FileStorage::new(dir.path().join("nested").join("data"));
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStorage::new(dir.path());

        store.set_item("session", "{}").unwrap();
        store.remove_item("session").unwrap();
        assert!(store.get_item("session").unwrap().is_none());

        // removing again is fine
        store.remove_item("session").unwrap();
    }

    #[test]
    fn test_overwrite_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let store = FileStorage::new(dir.path());

        store.set_item("k", "first").unwrap();
        store.set_item("k", "second").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("second"));
    }
}
