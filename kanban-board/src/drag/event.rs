//! Drag events emitted by the drag-and-drop capability
//!
//! The kind of the dragged entity is decided once, at drag start, and
//! carried as a typed variant from then on. A column id and a task id that
//! happen to share a value never compare equal.

use crate::types::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Kind of a draggable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Column,
    Task,
}

/// The entity picked up at drag start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragPayload {
    Column(Column),
    Task(Task),
}

impl DragPayload {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Task(_) => DragKind::Task,
        }
    }
}

/// A typed reference to a drag source or drop target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragRef {
    Column(ColumnId),
    Task(TaskId),
}

impl DragRef {
    /// Build a reference from an untyped `(id, kind)` pair
    pub fn from_parts(id: impl Into<String>, kind: DragKind) -> Self {
        match kind {
            DragKind::Column => Self::Column(ColumnId::from_string(id)),
            DragKind::Task => Self::Task(TaskId::from_string(id)),
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Task(_) => DragKind::Task,
        }
    }
}

impl From<ColumnId> for DragRef {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for DragRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

/// One step of a drag gesture: start, zero or more overs, end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    /// An entity was picked up
    Start { item: DragPayload },
    /// The pointer crossed into a new drop candidate (or none)
    Over {
        active: DragRef,
        over: Option<DragRef>,
    },
    /// The entity was released; `over` is absent when dropped outside any
    /// target or when the gesture was aborted
    End {
        active: DragRef,
        over: Option<DragRef>,
    },
}

impl DragEvent {
    pub fn start(item: DragPayload) -> Self {
        Self::Start { item }
    }

    pub fn over(active: impl Into<DragRef>, over: Option<DragRef>) -> Self {
        Self::Over {
            active: active.into(),
            over,
        }
    }

    pub fn end(active: impl Into<DragRef>, over: Option<DragRef>) -> Self {
        Self::End {
            active: active.into(),
            over,
        }
    }
}
