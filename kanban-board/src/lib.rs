//! Kanban board engine with drag-and-drop reordering
//!
//! This crate holds the state of a single kanban board - an ordered list of
//! columns and one flat, ordered list of tasks - and the engine that turns
//! drag-and-drop gestures into reorder and reparent mutations. Every mutation
//! is written through to a key-value storage before it returns.
//!
//! ## Overview
//!
//! - **Flat task sequence** - A column's tasks are the tasks carrying its id,
//!   in the order they appear in the single task sequence
//! - **Copy-on-write store** - Mutations replace whole sequences; readers
//!   compare by identity
//! - **Commands** - Each mutation is a command struct that implements
//!   [`Execute`], applied through [`KanbanOperationProcessor`]
//! - **Typed drag events** - Start, over and end events drive a three-state
//!   machine; tasks move live while hovering, columns commit on drop
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kanban_board::{BoardConfig, BoardHandle, DragPayload, DragRef, MemoryStorage};
//!
//! let mut board = BoardHandle::open(BoardConfig::default(), Box::new(MemoryStorage::new()));
//!
//! // Add a task to the seeded "todo" column
//! let task = board.add_task("todo").expect("todo column exists");
//!
//! // Drag it over the "done" column and drop it
//! board.drag_start(DragPayload::Task(task.clone()));
//! board.drag_over(task.id.clone(), Some(DragRef::Column("done".into())));
//! board.drag_end(task.id, None);
//!
//! for column in board.view().columns {
//!     println!("{}: {} tasks", column.title, column.task_count);
//! }
//! ```
//!
//! ## Storage Layout
//!
//! ```text
//! kanbanColumns  -> [{"id": "todo", "title": "Todo"}, ...]
//! kanbanTasks    -> [{"id": "...", "columnId": "todo", "content": "Task 1"}, ...]
//! ```
//!
//! With [`FileStorage`] each key is a `{key}.json` file under the storage
//! root, guarded by an advisory lock while written.

mod context;
mod error;
mod processor;

pub mod config;
pub mod drag;
pub mod handle;
pub mod operation;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

// Command modules
pub mod column;
pub mod task;

pub use context::KanbanContext;
pub use error::{KanbanError, Result};
pub use processor::KanbanOperationProcessor;

pub use config::BoardConfig;
pub use drag::{
    relocate, transition, DragCommand, DragDispatcher, DragEvent, DragKind, DragPayload, DragRef,
    DragState, Transition,
};
pub use handle::BoardHandle;
pub use operation::{Execute, ExecutionResult, Operation};
pub use persistence::PersistenceBridge;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageLock};
pub use store::BoardStore;
pub use view::{BoardView, ColumnView, DragOverlay, TaskView};

// Re-export commonly used types
pub use types::{
    Column, ColumnId, IdGenerator, LogEntry, LogEntryId, SequentialIds, Task, TaskId,
    UlidGenerator,
};
