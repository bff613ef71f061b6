//! Render-ready view models
//!
//! A column view receives exactly the tasks whose column id matches it, in
//! flat-sequence order. While a drag is in progress the dragged entity is
//! also exposed as an overlay.

use crate::drag::DragState;
use crate::store::BoardStore;
use crate::types::{Column, ColumnId, Task, TaskId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            column_id: task.column_id.clone(),
            content: task.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub task_count: usize,
    pub tasks: Vec<TaskView>,
}

impl ColumnView {
    fn render(column: &Column, store: &BoardStore) -> Self {
        let tasks: Vec<TaskView> = store.tasks_in(&column.id).map(TaskView::from).collect();
        Self {
            id: column.id.clone(),
            title: column.title.clone(),
            task_count: tasks.len(),
            tasks,
        }
    }

    /// Ordered task ids, as a sortable list inside this column needs them
    pub fn task_ids(&self) -> Vec<&TaskId> {
        self.tasks.iter().map(|t| &t.id).collect()
    }
}

/// The entity following the pointer during a drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOverlay {
    Column(ColumnView),
    Task(TaskView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<DragOverlay>,
}

impl BoardView {
    pub fn render(store: &BoardStore, drag: &DragState) -> Self {
        let columns = store
            .columns()
            .iter()
            .map(|c| ColumnView::render(c, store))
            .collect();

        let overlay = match drag {
            DragState::Idle => None,
            DragState::DraggingColumn(id) => store
                .find_column(id)
                .map(|c| DragOverlay::Column(ColumnView::render(c, store))),
            DragState::DraggingTask(id) => store
                .find_task(id)
                .map(|t| DragOverlay::Task(TaskView::from(t))),
        };

        Self { columns, overlay }
    }

    /// Ordered column ids
    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.columns.iter().map(|c| &c.id).collect()
    }
}
