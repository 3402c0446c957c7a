//! Operation entity - one filesystem change in a plan
//!
//! A sum type rather than a struct with optional fields: creates only carry a
//! target, deletes only a source, moves both.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of operation, used for grouping and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    CreateFile,
    CreateDir,
    Move,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::CreateFile => "create_file",
            OperationKind::CreateDir => "create_dir",
            OperationKind::Move => "move",
            OperationKind::Delete => "delete",
        }
    }

    /// Creates run before moves and deletes
    pub fn is_create(&self) -> bool {
        matches!(self, OperationKind::CreateFile | OperationKind::CreateDir)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single planned filesystem change
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Create an empty file
    CreateFile { target: PathBuf },
    /// Create a directory (and any missing parents)
    CreateDir { target: PathBuf },
    /// Rename or move an existing entry; `source != target`
    Move {
        source: PathBuf,
        target: PathBuf,
        is_dir: bool,
    },
    /// Remove an existing entry
    Delete { source: PathBuf, is_dir: bool },
}

impl Operation {
    pub fn create_file(target: impl Into<PathBuf>) -> Self {
        Operation::CreateFile {
            target: target.into(),
        }
    }

    pub fn create_dir(target: impl Into<PathBuf>) -> Self {
        Operation::CreateDir {
            target: target.into(),
        }
    }

    pub fn move_entry(source: impl Into<PathBuf>, target: impl Into<PathBuf>, is_dir: bool) -> Self {
        Operation::Move {
            source: source.into(),
            target: target.into(),
            is_dir,
        }
    }

    pub fn delete(source: impl Into<PathBuf>, is_dir: bool) -> Self {
        Operation::Delete {
            source: source.into(),
            is_dir,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::CreateFile { .. } => OperationKind::CreateFile,
            Operation::CreateDir { .. } => OperationKind::CreateDir,
            Operation::Move { .. } => OperationKind::Move,
            Operation::Delete { .. } => OperationKind::Delete,
        }
    }

    /// Existing path the operation reads from (moves and deletes)
    pub fn source(&self) -> Option<&Path> {
        match self {
            Operation::Move { source, .. } | Operation::Delete { source, .. } => Some(source),
            Operation::CreateFile { .. } | Operation::CreateDir { .. } => None,
        }
    }

    /// Path the operation produces (creates and moves)
    pub fn target(&self) -> Option<&Path> {
        match self {
            Operation::CreateFile { target }
            | Operation::CreateDir { target }
            | Operation::Move { target, .. } => Some(target),
            Operation::Delete { .. } => None,
        }
    }

    /// Whether the operation concerns a directory
    pub fn is_dir(&self) -> bool {
        match self {
            Operation::CreateFile { .. } => false,
            Operation::CreateDir { .. } => true,
            Operation::Move { is_dir, .. } | Operation::Delete { is_dir, .. } => *is_dir,
        }
    }
}
