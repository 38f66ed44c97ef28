//! Board state manager
//!
//! Owns the three task lists and the drag session, and applies every
//! board operation: drag gestures (start, enter, drop, end) and task CRUD.
//!
//! Lookups that find nothing are silent no-ops. After each call that
//! changes the lists, the board is handed to the [`SnapshotStore`]; a failed
//! save is logged and the in-memory board stays authoritative.

use log::{debug, info, warn};
use thiserror::Error;

use crate::core::models::{Board, DragSession, Task, TaskStatus};
use crate::core::ports::SnapshotStore;

/// Errors returned by board operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A task with this id is already on the board
    #[error("task {0} already exists on the board")]
    DuplicateTaskId(u64),

    /// Task ids start at 1
    #[error("task id must be a positive integer")]
    ZeroTaskId,
}

/// The board plus the drag gesture in flight, backed by a snapshot store
#[derive(Debug)]
pub struct BoardManager<S: SnapshotStore> {
    board: Board,
    drag: Option<DragSession>,
    store: S,
}

impl<S: SnapshotStore> BoardManager<S> {
    /// Restore the board from `store`
    ///
    /// When the store has no snapshot (or fails to load one) the board starts
    /// as [`Board::example`] if `seed_examples` is set, otherwise empty.
    #[must_use]
    pub fn open(store: S, seed_examples: bool) -> Self {
        let board = match store.load() {
            Ok(Some(board)) => {
                debug!("restored board snapshot with {} task(s)", board.len());
                for issue in board.integrity_issues() {
                    warn!("board snapshot: {issue}");
                }
                board
            },
            Ok(None) => fresh_board(seed_examples),
            Err(e) => {
                warn!("failed to load board snapshot, starting fresh: {e:#}");
                fresh_board(seed_examples)
            },
        };

        Self::with_board(store, board)
    }

    /// Wrap an existing board without consulting the store
    #[must_use]
    pub const fn with_board(store: S, board: Board) -> Self {
        Self {
            board,
            drag: None,
            store,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Tasks in the todo list
    #[must_use]
    pub fn todo(&self) -> &[Task] {
        &self.board.todo
    }

    /// Tasks in the in-progress list
    #[must_use]
    pub fn in_progress(&self) -> &[Task] {
        &self.board.in_progress
    }

    /// Tasks in the done list
    #[must_use]
    pub fn done(&self) -> &[Task] {
        &self.board.done
    }

    /// Tasks in the list for `status`
    #[must_use]
    pub fn list(&self, status: TaskStatus) -> &[Task] {
        self.board.list(status)
    }

    /// The whole board
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The active drag session, if any
    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Whether a drag gesture is in flight
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The backing snapshot store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning the board and the store
    #[must_use]
    pub fn into_parts(self) -> (Board, S) {
        (self.board, self.store)
    }

    // =========================================================================
    // Drag gestures
    // =========================================================================

    /// Begin dragging `task`, picked up from the `origin` list
    ///
    /// Replaces any session already in flight. The caller guarantees the
    /// task is in `origin`.
    pub fn start_drag(&mut self, task: &Task, origin: TaskStatus) {
        debug!("drag start: task {} from '{origin}'", task.id);
        self.drag = Some(DragSession::new(task.clone(), origin));
    }

    /// Live reorder while the pointer moves over position `new_index` of `target`
    ///
    /// Only reorders within the list the drag started in; moves between
    /// lists wait for [`drop`](Self::drop). `new_index` addresses the list
    /// with the dragged task already taken out, and an index past the end
    /// places the task last.
    pub fn drag_enter(&mut self, target: TaskStatus, new_index: usize) {
        let Some(session) = &self.drag else {
            return;
        };
        if session.origin() != target {
            return;
        }

        let id = session.task_id();
        let list = self.board.list_mut(target);
        let Some(current) = list.iter().position(|t| t.id == id) else {
            return;
        };

        let index = new_index.min(list.len() - 1);
        if current == index {
            return;
        }

        let task = list.remove(current);
        list.insert(index, task);
        debug!("drag enter: task {id} moved {current} -> {index} in '{target}'");

        self.persist();
    }

    /// Finish a drag over the `target` list
    ///
    /// A drop on a different list moves the dragged task to the end of
    /// `target` and updates its status. A drop on the origin list moves
    /// nothing, since [`drag_enter`](Self::drag_enter) already reordered it.
    /// The session is cleared in every case.
    ///
    /// Returns `true` if a task changed lists.
    pub fn drop(&mut self, target: TaskStatus) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        let origin = session.origin();
        if origin == target {
            return false;
        }

        let id = session.task_id();
        let Some(index) = self.board.position(origin, id) else {
            debug!("drop: task {id} no longer in '{origin}'");
            return false;
        };

        let mut task = self.board.list_mut(origin).remove(index);
        task.status = target;
        self.board.list_mut(target).push(task);
        info!("moved task {id} from '{origin}' to '{target}'");

        self.persist();
        true
    }

    /// Abandon the drag without a drop target
    pub fn end_drag(&mut self) {
        self.reset_drag_state();
    }

    /// Clear the drag session
    pub fn reset_drag_state(&mut self) {
        self.drag = None;
    }

    // =========================================================================
    // Task CRUD
    // =========================================================================

    /// Append a new task to the todo list
    ///
    /// The task's status is kept as given.
    ///
    /// # Errors
    ///
    /// Fails with [`BoardError::ZeroTaskId`] for id 0 and with
    /// [`BoardError::DuplicateTaskId`] if the id is already on the board.
    pub fn add_task(&mut self, task: Task) -> Result<(), BoardError> {
        if task.id == 0 {
            return Err(BoardError::ZeroTaskId);
        }
        if self.board.contains(task.id) {
            return Err(BoardError::DuplicateTaskId(task.id));
        }

        info!("added task {}: {}", task.id, task.title);
        self.board.todo.push(task);
        self.persist();
        Ok(())
    }

    /// Remove the task with `task_id` from the `list`
    ///
    /// Returns `true` if a task was removed.
    pub fn delete_task(&mut self, list: TaskStatus, task_id: u64) -> bool {
        let tasks = self.board.list_mut(list);
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        if tasks.len() == before {
            return false;
        }

        info!("deleted task {task_id} from '{list}'");
        self.persist();
        true
    }

    /// Replace a task in place
    ///
    /// The task is looked up by id in the list named by `updated.status`.
    /// If it is not there (for instance because the status was changed
    /// without moving the task) nothing happens.
    ///
    /// Returns `true` if a task was replaced.
    pub fn edit_task(&mut self, updated: Task) -> bool {
        let status = updated.status;
        let Some(slot) = self.board.list_mut(status).iter_mut().find(|t| t.id == updated.id) else {
            return false;
        };

        info!("edited task {} in '{status}'", updated.id);
        *slot = updated;
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.board) {
            warn!("failed to save board snapshot: {e:#}");
        }
    }
}

fn fresh_board(seed_examples: bool) -> Board {
    if seed_examples {
        debug!("no board snapshot, seeding example tasks");
        Board::example()
    } else {
        Board::new()
    }
}
