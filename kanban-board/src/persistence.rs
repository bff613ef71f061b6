//! PersistenceBridge - loads the board from storage and mirrors every change
//!
//! Columns and tasks are stored under two independent keys as JSON arrays.
//! Loading never fails: an absent or unparseable entry falls back to the
//! seed columns (or an empty task list), and the loaded sequences are
//! repaired so the store invariants hold.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::storage::Storage;
use crate::store::BoardStore;
use crate::types::{Column, Task};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Write-through bridge between a `BoardStore` and a `Storage`
pub struct PersistenceBridge {
    storage: Box<dyn Storage>,
    columns_key: String,
    tasks_key: String,
    seed_columns: Vec<Column>,
}

impl PersistenceBridge {
    /// Create a bridge using the keys and seed columns from the config
    pub fn new(storage: Box<dyn Storage>, config: &BoardConfig) -> Self {
        Self {
            storage,
            columns_key: config.columns_key.clone(),
            tasks_key: config.tasks_key.clone(),
            seed_columns: config.seed_columns.clone(),
        }
    }

    /// Load the board, falling back to seed state for anything unreadable
    pub fn load(&self) -> BoardStore {
        let columns = self
            .read_entry::<Vec<Column>>(&self.columns_key)
            .unwrap_or_else(|| self.seed_columns.clone());
        let tasks = self
            .read_entry::<Vec<Task>>(&self.tasks_key)
            .unwrap_or_default();

        let (columns, tasks) = sanitize(columns, tasks);
        debug!(
            columns = columns.len(),
            tasks = tasks.len(),
            "loaded board state"
        );
        BoardStore::new(columns, tasks)
    }

    /// Serialize both sequences and write them under their keys
    pub fn save(&mut self, store: &BoardStore) -> Result<()> {
        let columns = serde_json::to_string_pretty(store.columns())?;
        let tasks = serde_json::to_string_pretty(store.tasks())?;
        self.storage.set(&self.columns_key, &columns)?;
        self.storage.set(&self.tasks_key, &tasks)?;
        Ok(())
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.storage.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(key, "no stored entry, using default");
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read stored entry, using default");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored entry is malformed, using default");
                None
            }
        }
    }
}

/// Restore the store invariants on externally supplied sequences.
///
/// Duplicate ids keep their first occurrence; tasks whose column is not
/// live are dropped.
pub fn sanitize(columns: Vec<Column>, tasks: Vec<Task>) -> (Vec<Column>, Vec<Task>) {
    let mut seen = HashSet::new();
    let columns: Vec<Column> = columns
        .into_iter()
        .filter(|c| {
            let fresh = seen.insert(c.id.clone());
            if !fresh {
                warn!(id = %c.id, "dropping duplicate column");
            }
            fresh
        })
        .collect();

    let mut seen = HashSet::new();
    let tasks = tasks
        .into_iter()
        .filter(|t| {
            if !columns.iter().any(|c| c.id == t.column_id) {
                warn!(id = %t.id, column = %t.column_id, "dropping task in missing column");
                return false;
            }
            let fresh = seen.insert(t.id.clone());
            if !fresh {
                warn!(id = %t.id, "dropping duplicate task");
            }
            fresh
        })
        .collect();

    (columns, tasks)
}
