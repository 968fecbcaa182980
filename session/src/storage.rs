//! Local on-device storage for order persistence.
//!
//! A synchronous string key-value store keyed by store identifier, surviving
//! process restarts on the same device. Only the order ledger goes through
//! here; the inventory travels over the sync boundary instead.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
}

/// Synchronous string key-value storage scoped by store identifier.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file per store under a data directory.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    /// Create storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Store names come from URLs; keep the file name tame.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl LocalStorage for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("avocado-salad").unwrap().is_none());

        storage.set("avocado-salad", "{\"items\":{}}").unwrap();
        assert_eq!(
            storage.get("avocado-salad").unwrap().as_deref(),
            Some("{\"items\":{}}")
        );

        storage.set("avocado-salad", "updated").unwrap();
        assert_eq!(storage.get("avocado-salad").unwrap().as_deref(), Some("updated"));
    }

    #[test]
    fn dir_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("catch-storage-{}", uuid::Uuid::new_v4()));
        let storage = DirStorage::new(&dir);

        assert!(storage.get("my-store").unwrap().is_none());

        storage.set("my-store", "hello").unwrap();
        assert_eq!(storage.get("my-store").unwrap().as_deref(), Some("hello"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn dir_storage_sanitizes_keys() {
        let dir = std::env::temp_dir().join(format!("catch-storage-{}", uuid::Uuid::new_v4()));
        let storage = DirStorage::new(&dir);

        // A hostile store name must not escape the data directory.
        storage.set("../../etc/passwd", "nope").unwrap();
        assert_eq!(
            storage.get("../../etc/passwd").unwrap().as_deref(),
            Some("nope")
        );
        assert!(dir.join("______etc_passwd.json").exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
