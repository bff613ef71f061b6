//! Drag state machine states

use super::event::DragRef;
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// What, if anything, is being dragged right now
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(ColumnId),
    DraggingTask(TaskId),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The entity being dragged
    pub fn active(&self) -> Option<DragRef> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(id) => Some(DragRef::Column(id.clone())),
            Self::DraggingTask(id) => Some(DragRef::Task(id.clone())),
        }
    }
}
