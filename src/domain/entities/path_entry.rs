//! PathEntry entity - one row of an original directory listing

use std::path::{Path, PathBuf};

use serde::Serialize;

/// An entry known to exist on disk when the listing was produced
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathEntry {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl PathEntry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }

    /// A regular file entry
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, false)
    }

    /// A directory entry
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::new(path, true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
