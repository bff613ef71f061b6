//! Property-based tests for the board invariants
//!
//! Random sequences of mutations and drags are applied to a board and the
//! store invariants are checked after every step.

use kanban_board::{relocate, BoardConfig, BoardHandle, DragPayload, DragRef, MemoryStorage};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Action {
    AddColumn,
    AddTask(usize),
    RemoveColumn(usize),
    RemoveTask(usize),
    DragTaskOverTask(usize, usize),
    DragTaskOverColumn(usize, usize),
    DragColumn(usize, usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::AddColumn),
        (0usize..8).prop_map(Action::AddTask),
        (0usize..8).prop_map(Action::AddTask),
        (0usize..8).prop_map(Action::RemoveColumn),
        (0usize..16).prop_map(Action::RemoveTask),
        (0usize..16, 0usize..16).prop_map(|(a, b)| Action::DragTaskOverTask(a, b)),
        (0usize..16, 0usize..8).prop_map(|(a, b)| Action::DragTaskOverColumn(a, b)),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Action::DragColumn(a, b)),
    ]
}

/// Board whose id generator proposes every value twice, so collisions
/// are routine
fn colliding_board() -> BoardHandle {
    let mut n = 0u64;
    BoardHandle::open_with_ids(
        BoardConfig::default(),
        Box::new(MemoryStorage::new()),
        Box::new(move || {
            n += 1;
            (n / 2).to_string()
        }),
    )
}

fn apply(board: &mut BoardHandle, action: &Action) -> Result<(), TestCaseError> {
    let columns = board.store().columns().to_vec();
    let tasks = board.store().tasks().to_vec();

    match *action {
        Action::AddColumn => {
            board.add_column(None);
        }
        Action::AddTask(c) => match columns.get(c % columns.len().max(1)) {
            Some(column) => {
                let task = board.add_task(column.id.clone());
                prop_assert!(task.is_some());
            }
            None => prop_assert!(board.add_task("missing").is_none()),
        },
        Action::RemoveColumn(c) => {
            if let Some(column) = columns.get(c % columns.len().max(1)) {
                let survivors: Vec<_> = tasks
                    .iter()
                    .filter(|t| t.column_id != column.id)
                    .cloned()
                    .collect();
                board.remove_column(column.id.clone());
                prop_assert_eq!(board.store().tasks(), survivors.as_slice());
                prop_assert!(!board.store().column_exists(&column.id));
            }
        }
        Action::RemoveTask(t) => {
            if let Some(task) = tasks.get(t % tasks.len().max(1)) {
                board.remove_task(task.id.clone());
                prop_assert_eq!(board.store().tasks().len(), tasks.len() - 1);
            }
        }
        Action::DragTaskOverTask(a, b) => {
            if !tasks.is_empty() {
                let active = &tasks[a % tasks.len()];
                let over = &tasks[b % tasks.len()];
                board.drag_start(DragPayload::Task(active.clone()));
                board.drag_over(active.id.clone(), Some(DragRef::Task(over.id.clone())));
                board.drag_end(active.id.clone(), Some(DragRef::Task(over.id.clone())));
                prop_assert_eq!(board.store().tasks().len(), tasks.len());
            }
        }
        Action::DragTaskOverColumn(a, c) => {
            if !tasks.is_empty() && !columns.is_empty() {
                let active = &tasks[a % tasks.len()];
                let column = &columns[c % columns.len()];
                board.drag_start(DragPayload::Task(active.clone()));
                board.drag_over(active.id.clone(), Some(DragRef::Column(column.id.clone())));
                board.drag_end(active.id.clone(), None);
                let moved = board.store().find_task(&active.id);
                prop_assert_eq!(moved.map(|t| &t.column_id), Some(&column.id));
            }
        }
        Action::DragColumn(a, b) => {
            if !columns.is_empty() {
                let active = &columns[a % columns.len()];
                let over = &columns[b % columns.len()];
                board.drag_start(DragPayload::Column(active.clone()));
                board.drag_end(active.id.clone(), Some(DragRef::Column(over.id.clone())));
                prop_assert_eq!(board.store().columns().len(), columns.len());
                prop_assert_eq!(board.store().tasks(), tasks.as_slice());
            }
        }
    }
    Ok(())
}

fn check_invariants(board: &BoardHandle) -> Result<(), TestCaseError> {
    let store = board.store();

    let mut seen = HashSet::new();
    for column in store.columns() {
        prop_assert!(seen.insert(column.id.to_string()), "duplicate id {}", column.id);
    }
    for task in store.tasks() {
        prop_assert!(seen.insert(task.id.to_string()), "duplicate id {}", task.id);
        prop_assert!(
            store.column_exists(&task.column_id),
            "task {} in missing column {}",
            task.id,
            task.column_id
        );
    }
    prop_assert!(board.drag_state().is_idle());
    Ok(())
}

proptest! {
    /// Property: ids stay unique and every task's column stays live under
    /// any sequence of mutations and drags
    #[test]
    fn test_invariants_hold_under_random_actions(
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut board = colliding_board();
        for action in &actions {
            apply(&mut board, action)?;
            check_invariants(&board)?;
        }
    }

    /// Property: moving an element to its own index changes nothing
    #[test]
    fn test_relocate_to_same_index_is_identity(
        items in prop::collection::vec(any::<u16>(), 0..20),
        index in 0usize..25,
    ) {
        prop_assert_eq!(relocate(&items, index, index), items);
    }

    /// Property: a relocation is undone by the reverse relocation
    #[test]
    fn test_relocate_reverse_restores_order(
        items in prop::collection::vec(any::<u16>(), 1..20),
        from in 0usize..20,
        to in 0usize..20,
    ) {
        let from = from % items.len();
        let to = to % items.len();
        let moved = relocate(&items, from, to);
        prop_assert_eq!(moved.len(), items.len());
        prop_assert_eq!(moved[to], items[from]);
        prop_assert_eq!(relocate(&moved, to, from), items);
    }
}
