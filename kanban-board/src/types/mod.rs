//! Core types for the kanban engine

mod column;
mod ids;
mod log;
mod task;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, IdGenerator, LogEntryId, SequentialIds, TaskId, UlidGenerator};
pub use log::LogEntry;
pub use task::Task;
