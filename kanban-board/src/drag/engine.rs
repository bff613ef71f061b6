//! Pure drag transitions
//!
//! `transition` maps the current drag state, a store snapshot and one event
//! to the next state and, optionally, a move command. It never touches the
//! store itself. Malformed events (unknown ids, no drop target, dragging
//! over oneself, events that don't match the current drag) produce no
//! command.
//!
//! Tasks are moved incrementally on every `Over` so the card visibly slots
//! into place while dragging; `End` only finalizes column drags.

use super::event::{DragEvent, DragPayload, DragRef};
use super::state::DragState;
use crate::column::MoveColumn;
use crate::store::BoardStore;
use crate::task::MoveTask;
use crate::types::{ColumnId, TaskId};
use tracing::debug;

/// A store mutation requested by a drag transition
#[derive(Debug)]
pub enum DragCommand {
    MoveTask(MoveTask),
    MoveColumn(MoveColumn),
}

/// Outcome of feeding one event to the state machine
#[derive(Debug)]
pub struct Transition {
    pub state: DragState,
    pub command: Option<DragCommand>,
}

impl Transition {
    fn to(state: DragState) -> Self {
        Self {
            state,
            command: None,
        }
    }
}

/// Compute the next drag state and the mutation (if any) for an event
pub fn transition(state: &DragState, store: &BoardStore, event: &DragEvent) -> Transition {
    match event {
        DragEvent::Start { item } => Transition::to(on_drag_start(store, item)),
        DragEvent::Over { active, over } => Transition {
            state: state.clone(),
            command: on_drag_over(state, store, active, over.as_ref()).map(DragCommand::MoveTask),
        },
        DragEvent::End { active, over } => Transition {
            state: DragState::Idle,
            command: on_drag_end(state, store, active, over.as_ref()).map(DragCommand::MoveColumn),
        },
    }
}

fn on_drag_start(store: &BoardStore, item: &DragPayload) -> DragState {
    match item {
        DragPayload::Column(column) if store.column_exists(&column.id) => {
            DragState::DraggingColumn(column.id.clone())
        }
        DragPayload::Task(task) if store.find_task(&task.id).is_some() => {
            DragState::DraggingTask(task.id.clone())
        }
        _ => {
            debug!(?item, "drag start for unknown entity ignored");
            DragState::Idle
        }
    }
}

fn on_drag_over(
    state: &DragState,
    store: &BoardStore,
    active: &DragRef,
    over: Option<&DragRef>,
) -> Option<MoveTask> {
    let DragState::DraggingTask(dragging) = state else {
        return None;
    };
    let DragRef::Task(active_id) = active else {
        return None;
    };
    if active_id != dragging {
        debug!(%active_id, %dragging, "drag over for a task not being dragged");
        return None;
    }
    let over = over?;
    if over == active {
        return None;
    }

    let active_index = store.task_index(active_id)?;
    let active_column = &store.tasks()[active_index].column_id;

    match over {
        DragRef::Task(over_id) => {
            let over_index = store.task_index(over_id)?;
            let over_column = &store.tasks()[over_index].column_id;
            Some(task_over_task(
                active_id,
                active_column != over_column,
                over_column,
                over_index,
            ))
        }
        DragRef::Column(column) => {
            if !store.column_exists(column) || column == active_column {
                return None;
            }
            // Reassign in place; the column view picks the task up by id
            Some(MoveTask::new(active_id.clone(), active_index).into_column(column.clone()))
        }
    }
}

fn task_over_task(
    active_id: &TaskId,
    crosses_columns: bool,
    over_column: &ColumnId,
    over_index: usize,
) -> MoveTask {
    if crosses_columns {
        // Land immediately before the target; an index below zero stays at 0
        MoveTask::new(active_id.clone(), over_index.saturating_sub(1))
            .into_column(over_column.clone())
    } else {
        MoveTask::new(active_id.clone(), over_index)
    }
}

fn on_drag_end(
    state: &DragState,
    store: &BoardStore,
    active: &DragRef,
    over: Option<&DragRef>,
) -> Option<MoveColumn> {
    let DragState::DraggingColumn(dragging) = state else {
        return None;
    };
    let DragRef::Column(active_id) = active else {
        return None;
    };
    if active_id != dragging {
        return None;
    }
    let Some(DragRef::Column(over_id)) = over else {
        debug!(%active_id, "column dropped without a column target");
        return None;
    };
    if over_id == active_id {
        return None;
    }

    store.column_index(active_id)?;
    let to_index = store.column_index(over_id)?;
    Some(MoveColumn::new(active_id.clone(), to_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task};

    fn store() -> BoardStore {
        BoardStore::new(
            vec![Column::new("a", "A"), Column::new("b", "B")],
            vec![
                Task::new("t1", "a", "one"),
                Task::new("t2", "a", "two"),
                Task::new("t3", "b", "three"),
            ],
        )
    }

    fn task_ref(id: &str) -> DragRef {
        DragRef::Task(TaskId::from_string(id))
    }

    fn column_ref(id: &str) -> DragRef {
        DragRef::Column(ColumnId::from_string(id))
    }

    fn dragging_task(id: &str) -> DragState {
        DragState::DraggingTask(TaskId::from_string(id))
    }

    fn move_task(transition: Transition) -> MoveTask {
        match transition.command {
            Some(DragCommand::MoveTask(op)) => op,
            other => panic!("expected a task move, got {:?}", other),
        }
    }

    #[test]
    fn test_start_enters_matching_state() {
        let store = store();

        let t = transition(
            &DragState::Idle,
            &store,
            &DragEvent::start(DragPayload::Column(Column::new("b", "B"))),
        );
        assert_eq!(t.state, DragState::DraggingColumn("b".into()));
        assert!(t.command.is_none());

        let t = transition(
            &DragState::Idle,
            &store,
            &DragEvent::start(DragPayload::Task(Task::new("t2", "a", "two"))),
        );
        assert_eq!(t.state, dragging_task("t2"));
    }

    #[test]
    fn test_start_unknown_entity_stays_idle() {
        let t = transition(
            &DragState::Idle,
            &store(),
            &DragEvent::start(DragPayload::Task(Task::new("t9", "a", "x"))),
        );
        assert!(t.state.is_idle());
    }

    #[test]
    fn test_over_foreign_task_lands_before_target() {
        let op = move_task(transition(
            &dragging_task("t1"),
            &store(),
            &DragEvent::over(TaskId::from_string("t1"), Some(task_ref("t3"))),
        ));

        assert_eq!(op.id.as_str(), "t1");
        assert_eq!(op.column, Some(ColumnId::from_string("b")));
        assert_eq!(op.to_index, 1);
    }

    #[test]
    fn test_over_foreign_task_at_front_saturates() {
        let op = move_task(transition(
            &dragging_task("t3"),
            &store(),
            &DragEvent::over(TaskId::from_string("t3"), Some(task_ref("t1"))),
        ));

        assert_eq!(op.column, Some(ColumnId::from_string("a")));
        assert_eq!(op.to_index, 0);
    }

    #[test]
    fn test_over_sibling_task_takes_its_index() {
        let op = move_task(transition(
            &dragging_task("t1"),
            &store(),
            &DragEvent::over(TaskId::from_string("t1"), Some(task_ref("t2"))),
        ));

        assert_eq!(op.column, None);
        assert_eq!(op.to_index, 1);
    }

    #[test]
    fn test_over_column_reassigns_in_place() {
        let op = move_task(transition(
            &dragging_task("t2"),
            &store(),
            &DragEvent::over(TaskId::from_string("t2"), Some(column_ref("b"))),
        ));

        assert_eq!(op.column, Some(ColumnId::from_string("b")));
        assert_eq!(op.to_index, 1);
    }

    #[test]
    fn test_over_noops() {
        let store = store();
        let t1 = TaskId::from_string("t1");
        let cases = [
            // no drop target
            (dragging_task("t1"), DragEvent::over(t1.clone(), None)),
            // over itself
            (dragging_task("t1"), DragEvent::over(t1.clone(), Some(task_ref("t1")))),
            // unknown target
            (dragging_task("t1"), DragEvent::over(t1.clone(), Some(task_ref("t9")))),
            (dragging_task("t1"), DragEvent::over(t1.clone(), Some(column_ref("z")))),
            // own column
            (dragging_task("t1"), DragEvent::over(t1.clone(), Some(column_ref("a")))),
            // not dragging a task
            (DragState::Idle, DragEvent::over(t1.clone(), Some(task_ref("t3")))),
            (
                DragState::DraggingColumn("a".into()),
                DragEvent::over(ColumnId::from_string("a"), Some(column_ref("b"))),
            ),
            // event for a different task than the one picked up
            (dragging_task("t2"), DragEvent::over(t1.clone(), Some(task_ref("t3")))),
        ];

        for (state, event) in cases {
            let t = transition(&state, &store, &event);
            assert!(t.command.is_none(), "expected no-op for {:?}", event);
            assert_eq!(t.state, state);
        }
    }

    #[test]
    fn test_end_moves_column() {
        let t = transition(
            &DragState::DraggingColumn("a".into()),
            &store(),
            &DragEvent::end(ColumnId::from_string("a"), Some(column_ref("b"))),
        );

        assert!(t.state.is_idle());
        match t.command {
            Some(DragCommand::MoveColumn(op)) => {
                assert_eq!(op.id.as_str(), "a");
                assert_eq!(op.to_index, 1);
            }
            other => panic!("expected a column move, got {:?}", other),
        }
    }

    #[test]
    fn test_end_noops_still_reset_state() {
        let store = store();
        let a = ColumnId::from_string("a");
        let cases = [
            (DragState::DraggingColumn(a.clone()), DragEvent::end(a.clone(), None)),
            (
                DragState::DraggingColumn(a.clone()),
                DragEvent::end(a.clone(), Some(column_ref("a"))),
            ),
            (
                DragState::DraggingColumn(a.clone()),
                DragEvent::end(a.clone(), Some(task_ref("t3"))),
            ),
            (
                DragState::DraggingColumn(a.clone()),
                DragEvent::end(a.clone(), Some(column_ref("zzz"))),
            ),
            (
                dragging_task("t1"),
                DragEvent::end(TaskId::from_string("t1"), Some(task_ref("t3"))),
            ),
        ];

        for (state, event) in cases {
            let t = transition(&state, &store, &event);
            assert!(t.command.is_none(), "expected no-op for {:?}", event);
            assert!(t.state.is_idle());
        }
    }
}
