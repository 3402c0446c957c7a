//! Entries derived from the lines of an edited listing buffer

use std::path::PathBuf;

use serde::Serialize;

/// One parsed, non-blank, non-marker line of the edited buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditedEntry {
    /// The line as the user left it
    pub raw_line: String,
    /// Absolute, resolved path the line names
    pub resolved_path: PathBuf,
    /// `resolved_path` relative to the listing root (never empty)
    pub root_relative_path: PathBuf,
    /// Forward-slash relative path without trailing slash; the alignment key
    pub normalized_key: String,
    /// The line ended in `/` or `\`
    pub is_dir_hint: bool,
}

/// A `[DELETE] <path>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteMarker {
    pub raw_line: String,
    pub resolved_path: PathBuf,
    pub root_relative_path: PathBuf,
    pub normalized_key: String,
}

impl DeleteMarker {
    /// Reuse the path fields of an entry parsed from the marker's remainder
    pub fn from_entry(raw_line: impl Into<String>, entry: EditedEntry) -> Self {
        Self {
            raw_line: raw_line.into(),
            resolved_path: entry.resolved_path,
            root_relative_path: entry.root_relative_path,
            normalized_key: entry.normalized_key,
        }
    }
}
