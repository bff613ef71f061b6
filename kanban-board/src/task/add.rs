//! AddTask command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Append a new task to a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// The column the task goes into
    pub column_id: ColumnId,
    /// Task content; defaults to "Task {n}" where n is the new total count
    pub content: Option<String>,
}

impl AddTask {
    /// Create a new AddTask command for a column
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            content: None,
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<KanbanContext> for AddTask {
    type Output = Option<Task>;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Option<Task>> {
        // Never create a task pointing at a missing column
        if !ctx.store().column_exists(&self.column_id) {
            return ExecutionResult::Unlogged { value: None };
        }

        let content = match &self.content {
            Some(content) => content.clone(),
            None => ctx.config().task_content(ctx.store().tasks().len()),
        };
        let task = Task {
            id: ctx.fresh_task_id(),
            column_id: self.column_id.clone(),
            content,
        };

        let mut tasks = ctx.store().tasks().to_vec();
        tasks.push(task.clone());
        ctx.store_mut().replace_tasks(tasks);

        ExecutionResult::Logged { value: Some(task) }
    }
}
