//! Reorder engine: drag events, the drag state machine and relocation

mod dispatcher;
mod engine;
mod event;
mod relocate;
mod state;

pub use dispatcher::DragDispatcher;
pub use engine::{transition, DragCommand, Transition};
pub use event::{DragEvent, DragKind, DragPayload, DragRef};
pub use relocate::relocate;
pub use state::DragState;
