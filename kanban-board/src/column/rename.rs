//! RenameColumn command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Replace a column's title, keeping its position
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column ID to rename
    pub id: ColumnId,
    /// New column title
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Operation for RenameColumn {
    fn verb(&self) -> &'static str {
        "rename"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute<KanbanContext> for RenameColumn {
    type Output = Option<Column>;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Option<Column>> {
        let Some(index) = ctx.store().column_index(&self.id) else {
            return ExecutionResult::Unlogged { value: None };
        };
        if ctx.store().columns()[index].title == self.title {
            let unchanged = ctx.store().columns()[index].clone();
            return ExecutionResult::Unlogged {
                value: Some(unchanged),
            };
        }

        let mut columns = ctx.store().columns().to_vec();
        columns[index].title = self.title.clone();
        let renamed = columns[index].clone();
        ctx.store_mut().replace_columns(columns);

        ExecutionResult::Logged {
            value: Some(renamed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::storage::MemoryStorage;

    fn setup() -> KanbanContext {
        KanbanContext::open(BoardConfig::default(), Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_rename_column_keeps_position() {
        let mut ctx = setup();

        let result = RenameColumn::new("doing", "In review").execute(&mut ctx);

        assert!(result.should_log());
        let columns = ctx.store().columns();
        assert_eq!(columns[1].id.as_str(), "doing");
        assert_eq!(columns[1].title, "In review");
        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn test_rename_unknown_column_is_noop() {
        let mut ctx = setup();
        let before = ctx.store().clone();

        let result = RenameColumn::new("missing", "x").execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(result.into_value(), None);
        assert_eq!(ctx.store(), &before);
    }

    #[test]
    fn test_rename_to_same_title_is_noop() {
        let mut ctx = setup();

        let result = RenameColumn::new("todo", "Todo").execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(ctx.store().version(), 0);
    }
}
