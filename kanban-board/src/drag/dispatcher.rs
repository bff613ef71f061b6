//! DragDispatcher - in-order consumption of drag events
//!
//! Events are queued as the drag-and-drop capability emits them and
//! processed strictly first-in first-out. Each event's mutation, including
//! its persistence write, completes before the next event is looked at.

use super::engine::{transition, DragCommand};
use super::event::DragEvent;
use super::state::DragState;
use crate::context::KanbanContext;
use crate::processor::KanbanOperationProcessor;
use std::collections::VecDeque;

/// Owns the drag state and the pending event queue
#[derive(Debug, Default)]
pub struct DragDispatcher {
    queue: VecDeque<DragEvent>,
    state: DragState,
}

impl DragDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Number of queued, unprocessed events
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue an event
    pub fn push(&mut self, event: DragEvent) {
        self.queue.push_back(event);
    }

    /// Process every queued event in order. Returns how many were handled.
    pub fn dispatch(
        &mut self,
        ctx: &mut KanbanContext,
        processor: &KanbanOperationProcessor,
    ) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            let next = transition(&self.state, ctx.store(), &event);
            self.state = next.state;
            match next.command {
                Some(DragCommand::MoveTask(op)) => {
                    processor.process(&op, ctx);
                }
                Some(DragCommand::MoveColumn(op)) => {
                    processor.process(&op, ctx);
                }
                None => tracing::trace!(?event, "drag event produced no mutation"),
            }
            handled += 1;
        }
        handled
    }
}
