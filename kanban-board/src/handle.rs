//! BoardHandle - the surface a UI layer wires its affordances to
//!
//! Buttons map to the CRUD methods; the drag-and-drop capability's callbacks
//! map to `drag_start`, `drag_over` and `drag_end`. Every call is
//! synchronous and returns only after the change has been persisted.

use crate::column::{AddColumn, DeleteColumn, RenameColumn};
use crate::config::BoardConfig;
use crate::context::KanbanContext;
use crate::drag::{DragDispatcher, DragEvent, DragPayload, DragRef, DragState};
use crate::processor::KanbanOperationProcessor;
use crate::storage::Storage;
use crate::store::BoardStore;
use crate::task::{AddTask, DeleteTask, EditTask};
use crate::types::{Column, ColumnId, IdGenerator, LogEntry, Task, TaskId};
use crate::view::BoardView;

/// A handle to a single open kanban board.
pub struct BoardHandle {
    pub ctx: KanbanContext,
    pub processor: KanbanOperationProcessor,
    drag: DragDispatcher,
}

impl BoardHandle {
    /// Open a board over storage, loading persisted state or the seed
    pub fn open(config: BoardConfig, storage: Box<dyn Storage>) -> Self {
        Self::from_context(KanbanContext::open(config, storage))
    }

    /// Open a board with a specific id generator
    pub fn open_with_ids(
        config: BoardConfig,
        storage: Box<dyn Storage>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self::from_context(KanbanContext::open_with_ids(config, storage, ids))
    }

    fn from_context(ctx: KanbanContext) -> Self {
        Self {
            ctx,
            processor: KanbanOperationProcessor::new(),
            drag: DragDispatcher::new(),
        }
    }

    /// Attribute this handle's operations to an actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.processor = KanbanOperationProcessor::with_actor(actor);
        self
    }

    // =========================================================================
    // Columns
    // =========================================================================

    pub fn add_column(&mut self, title: Option<&str>) -> Column {
        let op = match title {
            Some(title) => AddColumn::new().with_title(title),
            None => AddColumn::new(),
        };
        self.processor.process(&op, &mut self.ctx)
    }

    pub fn rename_column(&mut self, id: impl Into<ColumnId>, title: impl Into<String>) {
        self.processor
            .process(&RenameColumn::new(id, title), &mut self.ctx);
    }

    pub fn remove_column(&mut self, id: impl Into<ColumnId>) {
        self.processor
            .process(&DeleteColumn::new(id), &mut self.ctx);
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Add a task; `None` when the column does not exist
    pub fn add_task(&mut self, column_id: impl Into<ColumnId>) -> Option<Task> {
        self.processor
            .process(&AddTask::new(column_id), &mut self.ctx)
    }

    pub fn edit_task(&mut self, id: impl Into<TaskId>, content: impl Into<String>) {
        self.processor
            .process(&EditTask::new(id, content), &mut self.ctx);
    }

    pub fn remove_task(&mut self, id: impl Into<TaskId>) {
        self.processor.process(&DeleteTask::new(id), &mut self.ctx);
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Queue and process one drag event
    pub fn handle(&mut self, event: DragEvent) {
        self.drag.push(event);
        self.drag.dispatch(&mut self.ctx, &self.processor);
    }

    pub fn drag_start(&mut self, item: DragPayload) {
        self.handle(DragEvent::start(item));
    }

    pub fn drag_over(&mut self, active: impl Into<DragRef>, over: Option<DragRef>) {
        self.handle(DragEvent::over(active, over));
    }

    pub fn drag_end(&mut self, active: impl Into<DragRef>, over: Option<DragRef>) {
        self.handle(DragEvent::end(active, over));
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn store(&self) -> &BoardStore {
        self.ctx.store()
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn view(&self) -> BoardView {
        BoardView::render(self.ctx.store(), self.drag.state())
    }

    /// Activity log, newest first
    pub fn activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        self.ctx.read_activity(limit)
    }
}
