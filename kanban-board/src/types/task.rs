//! Task type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board.
///
/// All tasks share one flat sequence; a task's column is given by
/// `column_id`, and tasks of the same column keep their on-screen order
/// relative to each other within that sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    /// Create a new task in the given column
    pub fn new(
        id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }

    /// Copy of this task placed in another column
    pub fn in_column(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }
}
