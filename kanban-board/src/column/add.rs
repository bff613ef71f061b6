//! AddColumn command

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::types::Column;
use serde::{Deserialize, Serialize};

/// Append a new column to the board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column title; defaults to "Column {n}" where n is the new count
    pub title: Option<String>,
}

impl AddColumn {
    /// Create a new AddColumn command with the default title
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute<KanbanContext> for AddColumn {
    type Output = Column;

    fn execute(&self, ctx: &mut KanbanContext) -> ExecutionResult<Column> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => ctx.config().column_title(ctx.store().columns().len()),
        };
        let column = Column {
            id: ctx.fresh_column_id(),
            title,
        };

        let mut columns = ctx.store().columns().to_vec();
        columns.push(column.clone());
        ctx.store_mut().replace_columns(columns);

        ExecutionResult::Logged { value: column }
    }
}
