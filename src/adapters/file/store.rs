//! JSON file snapshot store

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Board;
use crate::core::ports::SnapshotStore;

/// Errors from reading or writing the snapshot file
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error on the snapshot file
    #[error("io error on {path}: {source}")]
    Io {
        /// The file being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not a valid board snapshot
    #[error("invalid board snapshot {path}: {source}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// The board could not be encoded
    #[error("failed to encode board snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk layout: the board lists at the top level, plus a save timestamp
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    #[serde(flatten)]
    board: Board,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// Stores the board as a pretty-printed JSON file
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path` (the file need not exist yet)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the snapshot was last written, if known
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.read()?.and_then(|file| file.saved_at))
    }

    fn read(&self) -> Result<Option<SnapshotFile>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let file = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(file))
    }

    fn write(&self, board: &Board) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let file = SnapshotFile {
            board: board.clone(),
            saved_at: Some(Utc::now()),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;

        debug!("saved board snapshot to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Option<Board>> {
        Ok(self.read()?.map(|file| file.board))
    }

    fn save(&self, board: &Board) -> anyhow::Result<()> {
        Ok(self.write(board)?)
    }
}
