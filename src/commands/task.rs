//! Task commands - add, edit, delete, move, reorder, reset

use taskboard::adapters::JsonFileStore;
use taskboard::core::models::{Board, Priority, Task, TaskStatus};
use taskboard::core::ports::SnapshotStore;
use taskboard::core::services::{BoardManager, required};
use taskboard::output::{OperationResult, OutputMode, TaskInfo, TaskResult};

use super::{board_store, open_board, parse_arg};
use crate::cli::Command;

/// Handle task subcommands
pub fn task_cmd(command: Command, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Command::Add {
            title,
            description,
            responsible,
            performers,
            priority,
            id,
        } => add(
            Task::new(0, title)
                .with_description(description)
                .with_responsible(responsible)
                .with_performers(performers),
            priority.as_deref(),
            id,
            mode,
        ),
        Command::Edit {
            id,
            title,
            description,
            responsible,
            performers,
            priority,
        } => edit(
            id,
            TaskChanges {
                title,
                description,
                responsible,
                performers,
                priority,
            },
            mode,
        ),
        Command::Delete { id, from } => delete(id, from.as_deref(), mode),
        Command::Move { id, to } => move_task(id, &to, mode),
        Command::Reorder { id, index } => reorder(id, index, mode),
        Command::Reset { empty } => reset(empty, mode),
        Command::List { .. } | Command::Config { .. } | Command::Version => {
            anyhow::bail!("not a task command")
        },
    }
}

/// Field updates from `taskboard edit`
struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    responsible: Option<String>,
    performers: Option<Vec<String>>,
    priority: Option<String>,
}

fn find(manager: &BoardManager<JsonFileStore>, id: u64) -> Option<(TaskStatus, Task)> {
    manager.board().find_task(id).map(|(status, task)| (status, task.clone()))
}

fn not_found(id: u64, mode: OutputMode) {
    TaskResult {
        success: false,
        message: format!("Task not found: {id}"),
        task: None,
    }
    .render(mode);
}

fn add(mut task: Task, priority: Option<&str>, id: Option<u64>, mode: OutputMode) -> anyhow::Result<()> {
    required(task.title.trim()).map_err(|e| anyhow::anyhow!("title: {e}"))?;
    if let Some(priority) = priority {
        task.priority = parse_arg(priority)?;
    }

    let mut manager = open_board()?;
    task.id = match id {
        Some(id) => id,
        None => manager
            .board()
            .next_id()
            .ok_or_else(|| anyhow::anyhow!("no free task id: the board already holds id {}", u64::MAX))?,
    };
    let id = task.id;

    manager.add_task(task)?;

    TaskResult {
        success: true,
        message: format!("Created task: {id}"),
        task: find(&manager, id).map(|(_, t)| TaskInfo::from(&t)),
    }
    .render(mode);
    Ok(())
}

fn edit(id: u64, changes: TaskChanges, mode: OutputMode) -> anyhow::Result<()> {
    let mut manager = open_board()?;
    let Some((_, mut task)) = find(&manager, id) else {
        not_found(id, mode);
        return Ok(());
    };

    if let Some(title) = changes.title {
        required(title.trim()).map_err(|e| anyhow::anyhow!("title: {e}"))?;
        task.title = title;
    }
    if let Some(description) = changes.description {
        task.description = description;
    }
    if let Some(responsible) = changes.responsible {
        task.responsible_person = responsible;
    }
    if let Some(performers) = changes.performers {
        task.performers = performers;
    }
    if let Some(priority) = changes.priority {
        task.priority = parse_arg::<Priority>(&priority)?;
    }

    let updated = manager.edit_task(task.clone());

    TaskResult {
        success: updated,
        message: if updated {
            format!("Updated task: {id}")
        } else {
            format!("Task not updated: {id}")
        },
        task: Some(TaskInfo::from(&task)),
    }
    .render(mode);
    Ok(())
}

fn delete(id: u64, from: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let mut manager = open_board()?;
    let list = match from {
        Some(from) => parse_arg(from)?,
        None => match find(&manager, id) {
            Some((status, _)) => status,
            None => {
                not_found(id, mode);
                return Ok(());
            },
        },
    };

    let removed = manager.delete_task(list, id);

    OperationResult {
        success: removed,
        message: if removed {
            format!("Deleted task {id} from {list}")
        } else {
            format!("Task {id} is not in {list}")
        },
    }
    .render(mode);
    Ok(())
}

fn move_task(id: u64, to: &str, mode: OutputMode) -> anyhow::Result<()> {
    let to: TaskStatus = parse_arg(to)?;
    let mut manager = open_board()?;
    let Some((from, task)) = find(&manager, id) else {
        not_found(id, mode);
        return Ok(());
    };

    manager.start_drag(&task, from);
    let moved = manager.drop(to);

    TaskResult {
        success: moved,
        message: if moved {
            format!("Moved task {id}: {from} -> {to}")
        } else {
            format!("Task {id} is already in {to}")
        },
        task: find(&manager, id).map(|(_, t)| TaskInfo::from(&t)),
    }
    .render(mode);
    Ok(())
}

fn reorder(id: u64, index: usize, mode: OutputMode) -> anyhow::Result<()> {
    let mut manager = open_board()?;
    let Some((list, task)) = find(&manager, id) else {
        not_found(id, mode);
        return Ok(());
    };
    let before = manager.board().position(list, id);

    manager.start_drag(&task, list);
    manager.drag_enter(list, index);
    manager.drop(list);

    let after = manager.board().position(list, id);
    TaskResult {
        success: before != after,
        message: format!(
            "Task {id} is at position {} in {list}",
            after.map_or_else(|| "?".to_string(), |p| p.to_string())
        ),
        task: Some(TaskInfo::from(&task)),
    }
    .render(mode);
    Ok(())
}

fn reset(empty: bool, mode: OutputMode) -> anyhow::Result<()> {
    let board = if empty { Board::new() } else { Board::example() };
    board_store()?.save(&board)?;

    OperationResult {
        success: true,
        message: format!("Board reset ({} task(s))", board.len()),
    }
    .render(mode);
    Ok(())
}
