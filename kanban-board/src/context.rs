//! KanbanContext - access to the board state for commands
//!
//! The context provides access to the store, the id oracle, persistence and
//! the activity log. No business logic methods, just access primitives.
//! Commands do all the work.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::persistence::PersistenceBridge;
use crate::storage::Storage;
use crate::store::BoardStore;
use crate::types::{ColumnId, IdGenerator, LogEntry, TaskId, UlidGenerator};
use std::collections::VecDeque;

/// Context passed to every command - provides access, not logic
pub struct KanbanContext {
    store: BoardStore,
    ids: Box<dyn IdGenerator>,
    bridge: PersistenceBridge,
    config: BoardConfig,
    /// Newest entry at the front
    activity: VecDeque<LogEntry>,
}

impl KanbanContext {
    /// Open a context over storage, loading the persisted board
    pub fn open(config: BoardConfig, storage: Box<dyn Storage>) -> Self {
        Self::open_with_ids(config, storage, Box::new(UlidGenerator))
    }

    /// Open a context with a specific id generator
    pub fn open_with_ids(
        config: BoardConfig,
        storage: Box<dyn Storage>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let bridge = PersistenceBridge::new(storage, &config);
        let store = bridge.load();
        Self {
            store,
            ids,
            bridge,
            config,
            activity: VecDeque::new(),
        }
    }

    // =========================================================================
    // Store access
    // =========================================================================

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// A column id not used by any live column or task
    pub fn fresh_column_id(&mut self) -> ColumnId {
        ColumnId::from_string(self.fresh_raw_id())
    }

    /// A task id not used by any live column or task
    pub fn fresh_task_id(&mut self) -> TaskId {
        TaskId::from_string(self.fresh_raw_id())
    }

    fn fresh_raw_id(&mut self) -> String {
        loop {
            let candidate = self.ids.generate();
            if !self.store.contains_id(&candidate) {
                return candidate;
            }
            tracing::debug!(id = %candidate, "generated id already in use, retrying");
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Mirror the current store to storage
    pub fn persist(&mut self) -> Result<()> {
        self.bridge.save(&self.store)
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &dyn Storage {
        self.bridge.storage()
    }

    // =========================================================================
    // Activity logging
    // =========================================================================

    /// Record an entry in the in-memory activity log
    pub fn append_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_limit);
    }

    /// Read activity log entries, newest first
    pub fn read_activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let limit = limit.unwrap_or(self.activity.len());
        self.activity.iter().take(limit).cloned().collect()
    }
}
