//! Column type and the default seed columns

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage.
///
/// Columns live in a single ordered sequence; sequence position is the
/// display order and carries no other meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    /// Create a new column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// The columns a fresh board starts with
    pub fn defaults() -> Vec<Column> {
        vec![
            Column::new("todo", "Todo"),
            Column::new("doing", "Work in progress"),
            Column::new("done", "Done"),
        ]
    }
}
