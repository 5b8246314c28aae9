//! File-backed key-value store
//!
//! Each key is stored as `<key>.json` in one directory. Writes go through
//! an atomic temp-file rename, so a crash leaves either the old or the new
//! value on disk.

use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// A `KeyValueStore` that keeps one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FinanceError::Storage(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TRANSACTIONS_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get(TRANSACTIONS_KEY).unwrap(), None);
        store.set(TRANSACTIONS_KEY, "[]").unwrap();
        assert_eq!(store.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(temp_dir
            .path()
            .join("data")
            .join("finance-transactions.json")
            .exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        FileStore::new(temp_dir.path()).set("finance-darkmode", "true").unwrap();

        let reopened = FileStore::new(temp_dir.path());
        assert_eq!(reopened.get("finance-darkmode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.set("../escape", "1").is_err());
        assert!(store.get("").is_err());
    }
}
