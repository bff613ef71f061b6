//! MoveColumn command

use crate::context::KanbanContext;
use crate::drag::relocate;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Move a column to a new index in the column order
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    /// The column ID to move
    pub id: ColumnId,
    /// Target index (clamped to the last position)
    pub to_index: usize,
}

impl MoveColumn {
    pub fn new(id: impl Into<ColumnId>, to_index: usize) -> Self {
        Self {
            id: id.into(),
            to_index,
        }
    }
}

impl Operation for MoveColumn {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute<KanbanContext> for MoveColumn {
    type Output = Value;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Value> {
        let store = ctx.store();
        let Some(from) = store.column_index(&self.id) else {
            return ExecutionResult::Unlogged { value: Value::Null };
        };
        let to = self.to_index.min(store.columns().len() - 1);
        if from == to {
            return ExecutionResult::Unlogged { value: Value::Null };
        }

        let columns = relocate(store.columns(), from, to);
        ctx.store_mut().replace_columns(columns);

        ExecutionResult::Logged {
            value: serde_json::json!({ "id": self.id, "from": from, "to": to }),
        }
    }
}
