//! Directory scanner
//!
//! Produces the original listing for a root: one level, symlinks not
//! followed, directories first, then files, each sorted by case-folded name.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::PathEntry;
use crate::error::{CliptreeError, CliptreeResult};

/// Options for listing a directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Include dot-files
    pub show_hidden: bool,
}

/// List the entries of `root` in display order
pub fn scan_directory(root: &Path, options: &ScanOptions) -> CliptreeResult<Vec<PathEntry>> {
    if !root.exists() {
        return Err(CliptreeError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(CliptreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let read_dir = std::fs::read_dir(root).map_err(|source| CliptreeError::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| CliptreeError::Scan {
            path: root.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if !options.show_hidden && is_hidden(&name.to_string_lossy()) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let item = PathEntry::new(entry.path(), is_dir);
        if is_dir {
            dirs.push(item);
        } else {
            files.push(item);
        }
    }

    dirs.sort_by_cached_key(sort_key);
    files.sort_by_cached_key(sort_key);
    debug!(root = %root.display(), dirs = dirs.len(), files = files.len(), "scanned directory");

    dirs.extend(files);
    Ok(dirs)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn sort_key(entry: &PathEntry) -> String {
    entry
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
