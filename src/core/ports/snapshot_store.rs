//! Snapshot store port
//!
//! Defines the interface for saving and restoring the whole board.

use super::super::models::Board;

/// Durable storage for board snapshots
///
/// Implementations persist the three task lists between runs (JSON file,
/// memory, a browser key-value store, ...). The drag session is never part
/// of a snapshot.
pub trait SnapshotStore {
    /// Load the last saved board
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<Board>>;

    /// Persist the full board, replacing any previous snapshot
    fn save(&self, board: &Board) -> anyhow::Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> anyhow::Result<Option<Board>> {
        (**self).load()
    }

    fn save(&self, board: &Board) -> anyhow::Result<()> {
        (**self).save(board)
    }
}
