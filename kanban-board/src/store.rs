//! BoardStore - the owned, versioned column and task sequences
//!
//! Both sequences sit behind `Arc`s. Every write installs a fresh `Arc` and
//! bumps the version, so a clone of the store taken earlier is a stable
//! snapshot that later mutations never touch.

use crate::types::{Column, ColumnId, Task, TaskId};
use std::sync::Arc;

/// Ordered columns plus the flat ordered task sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStore {
    columns: Arc<Vec<Column>>,
    tasks: Arc<Vec<Task>>,
    version: u64,
}

impl BoardStore {
    /// Create a store holding the given sequences at version 0
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self {
            columns: Arc::new(columns),
            tasks: Arc::new(tasks),
            version: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Monotonic counter bumped on every write
    pub fn version(&self) -> u64 {
        self.version
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn column_exists(&self, id: &ColumnId) -> bool {
        self.find_column(id).is_some()
    }

    /// Tasks belonging to a column, in flat-sequence order
    pub fn tasks_in<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| &t.column_id == column)
    }

    /// Whether any live column or task already uses this raw id
    pub fn contains_id(&self, raw: &str) -> bool {
        self.columns.iter().any(|c| c.id.as_str() == raw)
            || self.tasks.iter().any(|t| t.id.as_str() == raw)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Install a new column sequence
    pub fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = Arc::new(columns);
        self.version += 1;
    }

    /// Install a new task sequence
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::new(tasks);
        self.version += 1;
    }

    /// Install both sequences as a single write
    pub fn replace_all(&mut self, columns: Vec<Column>, tasks: Vec<Task>) {
        self.columns = Arc::new(columns);
        self.tasks = Arc::new(tasks);
        self.version += 1;
    }

    /// Whether the sequences (ignoring version) match another store
    pub fn same_state(&self, other: &BoardStore) -> bool {
        self.columns == other.columns && self.tasks == other.tasks
    }
}
