//! Board configuration
//!
//! Everything has a default; a config file only needs the fields it
//! changes. There is no environment configuration.

use crate::error::Result;
use crate::types::Column;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storage key holding the serialized column sequence
pub const DEFAULT_COLUMNS_KEY: &str = "kanbanColumns";
/// Storage key holding the serialized task sequence
pub const DEFAULT_TASKS_KEY: &str = "kanbanTasks";
const DEFAULT_ACTIVITY_LIMIT: usize = 200;

/// Settings for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Storage key for columns
    pub columns_key: String,
    /// Storage key for tasks
    pub tasks_key: String,
    /// Columns used when storage holds no readable column sequence
    pub seed_columns: Vec<Column>,
    /// Default column titles are `"{prefix} {n}"`
    pub column_title_prefix: String,
    /// Default task contents are `"{prefix} {n}"`
    pub task_content_prefix: String,
    /// Maximum number of activity log entries kept in memory
    pub activity_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns_key: DEFAULT_COLUMNS_KEY.to_string(),
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            seed_columns: Column::defaults(),
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl BoardConfig {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load config from a JSON file, returning default if missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default board config");
                Self::default()
            }
        }
    }

    pub fn with_keys(mut self, columns_key: impl Into<String>, tasks_key: impl Into<String>) -> Self {
        self.columns_key = columns_key.into();
        self.tasks_key = tasks_key.into();
        self
    }

    pub fn with_seed_columns(mut self, columns: Vec<Column>) -> Self {
        self.seed_columns = columns;
        self
    }

    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self
    }

    /// Default title for a board that currently has `count` columns
    pub fn column_title(&self, count: usize) -> String {
        format!("{} {}", self.column_title_prefix, count + 1)
    }

    /// Default content for a board that currently has `count` tasks
    pub fn task_content(&self, count: usize) -> String {
        format!("{} {}", self.task_content_prefix, count + 1)
    }
}
