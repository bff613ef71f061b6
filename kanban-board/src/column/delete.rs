//! DeleteColumn command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delete a column together with every task in it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteColumn {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute<KanbanContext> for DeleteColumn {
    type Output = Value;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Value> {
        let store = ctx.store();
        if !store.column_exists(&self.id) {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        }

        let columns: Vec<_> = store
            .columns()
            .iter()
            .filter(|c| c.id != self.id)
            .cloned()
            .collect();
        let tasks: Vec<_> = store
            .tasks()
            .iter()
            .filter(|t| t.column_id != self.id)
            .cloned()
            .collect();
        let tasks_removed = store.tasks().len() - tasks.len();

        ctx.store_mut().replace_all(columns, tasks);

        ExecutionResult::Logged {
            value: serde_json::json!({
                "deleted": true,
                "id": self.id,
                "tasks_removed": tasks_removed,
            }),
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
    fn test_delete_column_cascades_to_its_tasks_only() {
        let mut ctx = setup();
        AddTask::new("todo").execute(&mut ctx);
        let keep = AddTask::new("doing").execute(&mut ctx).into_value().unwrap();
        AddTask::new("todo").execute(&mut ctx);

        let result = DeleteColumn::new("todo").execute(&mut ctx);

        assert!(result.should_log());
        assert_eq!(result.into_value()["tasks_removed"], 2);
        assert_eq!(ctx.store().columns().len(), 2);
        assert_eq!(ctx.store().tasks(), std::slice::from_ref(&keep));
    }

    #[test]
    fn test_delete_unknown_column_is_noop() {
        let mut ctx = setup();
        AddTask::new("todo").execute(&mut ctx);
        let before = ctx.store().clone();

        let result = DeleteColumn::new("nope").execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(result.into_value()["deleted"], false);
        assert_eq!(ctx.store(), &before);
    }
}
