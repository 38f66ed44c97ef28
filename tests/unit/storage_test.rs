//! Tests for snapshot stores (JSON file and in-memory)

use std::fs;

use taskboard::adapters::{InMemoryStore, JsonFileStore};
use taskboard::core::models::{Board, TaskStatus};
use taskboard::core::ports::SnapshotStore;
use taskboard::core::services::BoardManager;
use tempfile::TempDir;

use crate::common::{board, ids};

// =============================================================================
// JSON FILE STORE TESTS
// =============================================================================

#[test]
fn test_file_store_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("board.json"));
    assert!(store.load().unwrap().is_none());
    assert!(store.saved_at().unwrap().is_none());
}

#[test]
fn test_file_store_save_then_load() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("board.json"));
    let board = board(&[1, 2], &[3], &[4]);

    store.save(&board).unwrap();

    assert_eq!(store.load().unwrap(), Some(board));
    assert!(store.saved_at().unwrap().is_some());
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/deeper/board.json");
    let store = JsonFileStore::new(&path);

    store.save(&Board::example()).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_file_store_writes_list_keys_at_top_level() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    JsonFileStore::new(&path).save(&board(&[1], &[], &[])).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["todo"][0]["id"], 1);
    assert!(json["inProgress"].as_array().unwrap().is_empty());
    assert!(json.get("savedAt").is_some());
}

#[test]
fn test_file_store_reads_snapshot_without_timestamp() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    fs::write(
        &path,
        r#"{"todo": [], "inProgress": [{"id": 7, "title": "x", "status": "inProgress"}], "done": []}"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let board = store.load().unwrap().unwrap();
    assert_eq!(ids(&board.in_progress), vec![7]);
    assert!(store.saved_at().unwrap().is_none());
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("invalid board snapshot"));
}

#[test]
fn test_manager_on_corrupt_file_starts_fresh() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");
    fs::write(&path, "garbage").unwrap();

    let manager = BoardManager::open(JsonFileStore::new(&path), false);
    assert!(manager.board().is_empty());
}

#[test]
fn test_manager_persists_through_file_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board.json");

    let mut manager = BoardManager::open(JsonFileStore::new(&path), true);
    let task = manager.todo()[0].clone();
    manager.start_drag(&task, TaskStatus::Todo);
    manager.drop(TaskStatus::Done);

    let reopened = BoardManager::open(JsonFileStore::new(&path), true);
    assert_eq!(reopened.board(), manager.board());
    assert_eq!(ids(reopened.done()), vec![1]);
    assert_eq!(reopened.done()[0].status, TaskStatus::Done);
}

// =============================================================================
// IN-MEMORY STORE TESTS
// =============================================================================

#[test]
fn test_memory_store_starts_empty() {
    let store = InMemoryStore::new();
    assert!(store.load().unwrap().is_none());
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_memory_store_with_board() {
    let store = InMemoryStore::with_board(board(&[5], &[], &[]));
    let manager = BoardManager::open(store, true);
    assert_eq!(ids(manager.todo()), vec![5]);
}

#[test]
fn test_memory_store_keeps_latest_snapshot() {
    let store = InMemoryStore::new();
    store.save(&board(&[1], &[], &[])).unwrap();
    store.save(&board(&[1, 2], &[], &[])).unwrap();

    assert_eq!(store.save_count(), 2);
    assert_eq!(ids(&store.snapshot().unwrap().todo), vec![1, 2]);
}
