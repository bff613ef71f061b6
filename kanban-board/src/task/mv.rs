//! MoveTask command

use crate::context::KanbanContext;
use crate::drag::relocate;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Move a task within the flat task sequence, optionally into another column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// New column; `None` keeps the current one
    pub column: Option<ColumnId>,
    /// Target index in the flat task sequence (clamped to the last position)
    pub to_index: usize,
}

impl MoveTask {
    /// Move a task to an index, staying in its column
    pub fn new(id: impl Into<TaskId>, to_index: usize) -> Self {
        Self {
            id: id.into(),
            column: None,
            to_index,
        }
    }

    /// Also reassign the task to a column
    pub fn into_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<KanbanContext> for MoveTask {
    type Output = Value;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Value> {
        let store = ctx.store();
        let Some(from) = store.task_index(&self.id) else {
            return ExecutionResult::Unlogged { value: Value::Null };
        };
        let current_column = &store.tasks()[from].column_id;
        let column = match &self.column {
            Some(column) if !store.column_exists(column) => {
                return ExecutionResult::Unlogged { value: Value::Null };
            }
            Some(column) => column.clone(),
            None => current_column.clone(),
        };
        let to = self.to_index.min(store.tasks().len() - 1);
        if from == to && &column == current_column {
            return ExecutionResult::Unlogged { value: Value::Null };
        }

        // The relocated element is a fresh copy, so the column change can't
        // leak into the previous snapshot
        let mut tasks = relocate(store.tasks(), from, to);
        tasks[to].column_id = column.clone();
        ctx.store_mut().replace_tasks(tasks);

        ExecutionResult::Logged {
            value: serde_json::json!({
                "id": self.id,
                "column": column,
                "from": from,
                "to": to,
            }),
        }
    }
}
