//! Storage - keyed text entries backing the persistence bridge
//!
//! Storage is a plain key/value surface: no business logic, only data access
//! primitives. `MemoryStorage` behaves like a browser's local storage;
//! `FileStorage` keeps one JSON file per key in a directory.

use crate::error::{KanbanError, Result};
use fs2::FileExt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Keyed text storage
pub trait Storage: Send {
    /// Read the entry for a key, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) the entry for a key
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry for a key; absent keys are fine
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Directory-backed storage: each key is stored as `{root}/{key}.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the entry files
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at a directory (created on first write)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing a key
    pub fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Try to acquire an exclusive write lock (non-blocking)
    pub fn lock(&self) -> Result<StorageLock> {
        std::fs::create_dir_all(&self.root)?;

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.lock_path())?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StorageLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        let _lock = self.lock()?;
        atomic_write(&path, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        if path.exists() {
            let _lock = self.lock()?;
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// RAII lock guard - releases on drop
pub struct StorageLock {
    file: std::fs::File,
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Keys become file names, so they must not name other paths
fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.contains(['/', '\\'])
        || key.starts_with('.')
        || key.contains("..");
    if bad {
        return Err(KanbanError::invalid_key(key));
    }
    Ok(())
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    std::fs::rename(&temp_path, path)?;

    Ok(())
}
