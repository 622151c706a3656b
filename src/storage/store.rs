//! Flat key-value stores
//!
//! The budget is persisted as one text blob under one key. `FileStore`
//! keeps each key in its own `<key>.json` file; `MemoryStore` keeps them in
//! a map and is used by tests and dry runs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaysplitError;

use super::file_io::{read_text, write_text_atomic};

/// A flat string-to-text store
pub trait KeyValueStore: Send + Sync {
    /// Read the text stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, PaysplitError>;

    /// Store `value` under `key`, replacing whatever was there
    fn set(&self, key: &str, value: &str) -> Result<(), PaysplitError>;
}

/// Key-value store backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PaysplitError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PaysplitError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PaysplitError> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PaysplitError> {
        write_text_atomic(self.path_for(key)?, value)
    }
}

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PaysplitError> {
        let data = self.data.read().map_err(|e| {
            PaysplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PaysplitError> {
        let mut data = self.data.write().map_err(|e| {
            PaysplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("budget-state").unwrap(), None);

        store.set("budget-state", "{}").unwrap();
        assert!(temp_dir.path().join("budget-state.json").exists());
        assert_eq!(store.get("budget-state").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
