//! In-memory board storage
//!
//! Keeps the last saved snapshot in memory. Useful when embedding the board
//! in a host that persists on its own, and in tests.

use std::cell::{Cell, RefCell};

use crate::core::models::Board;
use crate::core::ports::SnapshotStore;

/// Holds the most recent snapshot in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RefCell<Option<Board>>,
    saves: Cell<usize>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `board`
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            snapshot: RefCell::new(Some(board)),
            saves: Cell::new(0),
        }
    }

    /// A copy of the stored snapshot
    #[must_use]
    pub fn snapshot(&self) -> Option<Board> {
        self.snapshot.borrow().clone()
    }

    /// How many times `save` has been called
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> anyhow::Result<Option<Board>> {
        Ok(self.snapshot())
    }

    fn save(&self, board: &Board) -> anyhow::Result<()> {
        *self.snapshot.borrow_mut() = Some(board.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
