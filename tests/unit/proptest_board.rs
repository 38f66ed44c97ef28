//! Property-based tests for the board manager
//!
//! Uses proptest to drive random operation sequences and check the board
//! invariants after every step.

use std::collections::HashSet;

use proptest::prelude::*;
use taskboard::core::models::{Board, TaskStatus};
use taskboard::core::services::BoardManager;

use crate::common::{ids, manager, task};

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Delete(TaskStatus, u64),
    Move(u64, TaskStatus),
    Reorder(u64, usize),
    Abandon(u64),
}

fn status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Todo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..20_u64).prop_map(Op::Add),
        (status(), 1..20_u64).prop_map(|(s, id)| Op::Delete(s, id)),
        (1..20_u64, status()).prop_map(|(id, s)| Op::Move(id, s)),
        (1..20_u64, 0..25_usize).prop_map(|(id, i)| Op::Reorder(id, i)),
        (1..20_u64).prop_map(Op::Abandon),
    ]
}

fn apply<S: taskboard::core::ports::SnapshotStore>(manager: &mut BoardManager<S>, op: &Op) {
    match *op {
        Op::Add(id) => {
            let _ = manager.add_task(task(id));
        },
        Op::Delete(list, id) => {
            manager.delete_task(list, id);
        },
        Op::Move(id, to) => {
            if let Some((from, task)) = manager.board().find_task(id).map(|(s, t)| (s, t.clone())) {
                manager.start_drag(&task, from);
                manager.drop(to);
            }
        },
        Op::Reorder(id, index) => {
            if let Some((list, task)) = manager.board().find_task(id).map(|(s, t)| (s, t.clone())) {
                manager.start_drag(&task, list);
                manager.drag_enter(list, index);
                manager.drop(list);
            }
        },
        Op::Abandon(id) => {
            if let Some((list, task)) = manager.board().find_task(id).map(|(s, t)| (s, t.clone())) {
                manager.start_drag(&task, list);
                manager.end_drag();
            }
        },
    }
}

fn id_set(board: &Board) -> HashSet<u64> {
    board.iter().map(|(_, t)| t.id).collect()
}

proptest! {
    /// Every id appears exactly once and every status matches its list
    #[test]
    fn board_invariants_hold(ops in prop::collection::vec(op(), 0..60)) {
        let mut manager = manager(Board::new());
        for op in &ops {
            apply(&mut manager, op);
            prop_assert!(manager.board().integrity_issues().is_empty(), "after {:?}", op);
            prop_assert!(!manager.is_dragging());
        }
    }

    /// Drag gestures never create or lose tasks
    #[test]
    fn drags_preserve_task_set(
        seed in prop::collection::vec(1..50_u64, 0..15),
        moves in prop::collection::vec((1..50_u64, status(), 0..20_usize), 0..40)
    ) {
        let mut manager = manager(Board::new());
        for id in seed {
            let _ = manager.add_task(task(id));
        }
        let before = id_set(manager.board());

        for (id, to, index) in moves {
            apply(&mut manager, &Op::Reorder(id, index));
            apply(&mut manager, &Op::Move(id, to));
        }

        prop_assert_eq!(id_set(manager.board()), before.clone());
        prop_assert_eq!(manager.board().len(), before.len());
    }

    /// Reordering only permutes the origin list
    #[test]
    fn reorder_is_a_permutation(len in 1..12_u64, pick in 0..12_usize, index in 0..15_usize) {
        let mut manager = manager(Board::new());
        for id in 1..=len {
            manager.add_task(task(id)).unwrap();
        }
        let original = ids(manager.todo());
        let task = manager.todo()[pick % original.len()].clone();

        manager.start_drag(&task, TaskStatus::Todo);
        manager.drag_enter(TaskStatus::Todo, index);

        let mut sorted = ids(manager.todo());
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);
        let position = manager.board().position(TaskStatus::Todo, task.id).unwrap();
        prop_assert_eq!(position, index.min(manager.todo().len() - 1));
    }
}
