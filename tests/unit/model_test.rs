//! Tests for task and board models

use taskboard::core::models::{Board, IntegrityIssue, Priority, Task, TaskStatus};
use test_case::test_case;

use crate::common::board;

// =============================================================================
// TASK STATUS TESTS
// =============================================================================

#[test_case("todo", TaskStatus::Todo ; "todo")]
#[test_case("TODO", TaskStatus::Todo ; "todo uppercase")]
#[test_case("inProgress", TaskStatus::InProgress ; "camel case")]
#[test_case("in_progress", TaskStatus::InProgress ; "snake case")]
#[test_case("in-progress", TaskStatus::InProgress ; "kebab case")]
#[test_case("doing", TaskStatus::InProgress ; "doing alias")]
#[test_case("done", TaskStatus::Done ; "done")]
fn test_task_status_from_str(input: &str, expected: TaskStatus) {
    assert_eq!(input.parse::<TaskStatus>().unwrap(), expected);
}

#[test]
fn test_task_status_from_str_invalid() {
    let result = "archived".parse::<TaskStatus>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid status"));
}

#[test]
fn test_task_status_display() {
    assert_eq!(TaskStatus::Todo.to_string(), "todo");
    assert_eq!(TaskStatus::InProgress.to_string(), "inProgress");
    assert_eq!(TaskStatus::Done.to_string(), "done");
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

// =============================================================================
// PRIORITY TESTS
// =============================================================================

#[test_case("low", Priority::Low ; "low")]
#[test_case("l", Priority::Low ; "low short")]
#[test_case("medium", Priority::Medium ; "medium")]
#[test_case("MED", Priority::Medium ; "medium abbreviated")]
#[test_case("high", Priority::High ; "high")]
fn test_priority_from_str(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test]
fn test_priority_from_str_invalid() {
    let result = "urgent".parse::<Priority>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid priority"));
}

#[test]
fn test_priority_display() {
    assert_eq!(Priority::Low.to_string(), "low");
    assert_eq!(Priority::Medium.to_string(), "medium");
    assert_eq!(Priority::High.to_string(), "high");
}

// =============================================================================
// TASK TESTS
// =============================================================================

#[test]
fn test_task_new_defaults() {
    let task = Task::new(1, "Homepage Development");
    assert_eq!(task.id, 1);
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.performers.is_empty());
}

#[test]
fn test_task_deserializes_original_shape() {
    let json = r#"{
        "id": 4,
        "title": "Payment System Integration",
        "description": "Integrating the payment system for transactions.",
        "responsiblePerson": "Vasyl Popov",
        "performers": ["Dmytro Ivanov", "Oleg Lysenko"],
        "status": "inProgress",
        "priority": "high"
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.responsible_person, "Vasyl Popov");
    assert_eq!(task.performers, vec!["Dmytro Ivanov", "Oleg Lysenko"]);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, Priority::High);
}

// =============================================================================
// BOARD TESTS
// =============================================================================

#[test]
fn test_board_list_resolves_status() {
    let mut board = board(&[1], &[2], &[3]);
    assert_eq!(board.list(TaskStatus::InProgress)[0].id, 2);

    board.list_mut(TaskStatus::Done).clear();
    assert!(board.done.is_empty());
}

#[test]
fn test_board_find_task() {
    let board = board(&[1], &[2], &[3]);
    let (status, task) = board.find_task(3).unwrap();
    assert_eq!(status, TaskStatus::Done);
    assert_eq!(task.id, 3);
    assert!(board.find_task(42).is_none());
}

#[test]
fn test_board_next_id_skips_gaps() {
    let board = board(&[2], &[9], &[4]);
    assert_eq!(board.next_id(), Some(10));
}

#[test]
fn test_board_iter_visits_in_column_order() {
    let board = board(&[1, 2], &[3], &[4]);
    let visited: Vec<_> = board.iter().map(|(s, t)| (s, t.id)).collect();
    assert_eq!(
        visited,
        vec![
            (TaskStatus::Todo, 1),
            (TaskStatus::Todo, 2),
            (TaskStatus::InProgress, 3),
            (TaskStatus::Done, 4),
        ]
    );
}

#[test]
fn test_board_integrity_clean() {
    assert!(board(&[1, 2], &[3], &[4]).integrity_issues().is_empty());
}

#[test]
fn test_board_integrity_duplicate_id() {
    let board = board(&[1], &[1], &[]);
    assert!(
        board
            .integrity_issues()
            .contains(&IntegrityIssue::DuplicateId { id: 1, count: 2 })
    );
}

#[test]
fn test_board_serializes_camel_case_lists() {
    let json = serde_json::to_value(board(&[1], &[2], &[])).unwrap();
    assert!(json.get("todo").is_some());
    assert!(json.get("inProgress").is_some());
    assert!(json.get("done").is_some());
}

#[test]
fn test_board_deserializes_missing_lists_as_empty() {
    let board: Board = serde_json::from_str(r#"{"todo": []}"#).unwrap();
    assert!(board.is_empty());
}
