//! EditTask command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Replace a task's content, keeping its position and column
#[derive(Debug, Deserialize, Serialize)]
pub struct EditTask {
    /// The task ID to edit
    pub id: TaskId,
    /// New content
    pub content: String,
}

impl EditTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Operation for EditTask {
    fn verb(&self) -> &'static str {
        "edit"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<KanbanContext> for EditTask {
    type Output = Option<Task>;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Option<Task>> {
        let Some(index) = ctx.store().task_index(&self.id) else {
            return ExecutionResult::Unlogged { value: None };
        };
        let current = &ctx.store().tasks()[index];
        if current.content == self.content {
            return ExecutionResult::Unlogged {
                value: Some(current.clone()),
            };
        }

        let mut tasks = ctx.store().tasks().to_vec();
        tasks[index].content = self.content.clone();
        let edited = tasks[index].clone();
        ctx.store_mut().replace_tasks(tasks);

        ExecutionResult::Logged {
            value: Some(edited),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::storage::MemoryStorage;
    use crate::task::AddTask;

    fn setup() -> KanbanContext {
        KanbanContext::open(BoardConfig::default(), Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_edit_task_keeps_position_and_column() {
        let mut ctx = setup();
        AddTask::new("todo").execute(&mut ctx);
        let target = AddTask::new("doing").execute(&mut ctx).into_value().unwrap();
        AddTask::new("todo").execute(&mut ctx);

        let result = EditTask::new(target.id.clone(), "Ship it").execute(&mut ctx);

        assert!(result.should_log());
        let tasks = ctx.store().tasks();
        assert_eq!(tasks[1].id, target.id);
        assert_eq!(tasks[1].content, "Ship it");
        assert_eq!(tasks[1].column_id.as_str(), "doing");
    }

    #[test]
    fn test_edit_unknown_task_is_noop() {
        let mut ctx = setup();

        let result = EditTask::new("missing", "x").execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(result.into_value(), None);
        assert_eq!(ctx.store().version(), 0);
    }
}
