//! DeleteTask command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delete a task
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<KanbanContext> for DeleteTask {
    type Output = Value;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Value> {
        let Some(index) = ctx.store().task_index(&self.id) else {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        };

        let mut tasks = ctx.store().tasks().to_vec();
        tasks.remove(index);
        ctx.store_mut().replace_tasks(tasks);

        ExecutionResult::Logged {
            value: serde_json::json!({ "deleted": true, "id": self.id }),
        }
    }
}
