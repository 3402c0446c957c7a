//! Line parser
//!
//! Turns one raw line of the edited listing into an `EditedEntry`, a
//! `DeleteMarker`, or a `ValidationError`. Blank lines parse to nothing.

use std::path::{Path, PathBuf};

use crate::domain::entities::{DeleteMarker, EditedEntry};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{normalized_key, relative_to_root, ValidationError};

/// Sentinel that marks a line for deletion (matched case-insensitively)
pub const DELETE_MARKER: &str = "[DELETE]";

/// Outcome of parsing one buffer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or whitespace-only line
    Blank,
    Entry(EditedEntry),
    Delete(DeleteMarker),
    Error(ValidationError),
}

/// Parse one raw line against a resolved root
pub fn parse_line<FS: FileSystem + ?Sized>(fs: &FS, root: &Path, raw: &str) -> ParsedLine {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }
    if is_delete_marker_line(trimmed) {
        return match parse_delete_marker(fs, root, raw) {
            Ok(marker) => ParsedLine::Delete(marker),
            Err(err) => ParsedLine::Error(err),
        };
    }
    match parse_entry(fs, root, raw) {
        Ok(entry) => ParsedLine::Entry(entry),
        Err(err) => ParsedLine::Error(err),
    }
}

/// Parse a normal (non-marker) line into an edited entry
pub fn parse_entry<FS: FileSystem + ?Sized>(
    fs: &FS,
    root: &Path,
    raw: &str,
) -> Result<EditedEntry, ValidationError> {
    let text = raw.trim();
    let is_dir_hint = text.ends_with(['/', '\\']);
    let text = text.trim_end_matches(['/', '\\']);
    if text.is_empty() {
        return Err(ValidationError::new("Edited line is empty after trimming."));
    }

    let candidate = PathBuf::from(text);
    let joined = if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    };
    let resolved = fs.resolve(&joined);

    let Some(rel) = relative_to_root(root, &resolved) else {
        return Err(ValidationError::at("Path escapes the current root.", &resolved));
    };
    if rel.as_os_str().is_empty() {
        return Err(ValidationError::at(
            "Path resolves to the root directory.",
            &resolved,
        ));
    }

    Ok(EditedEntry {
        raw_line: raw.to_string(),
        normalized_key: normalized_key(&rel),
        resolved_path: resolved,
        root_relative_path: rel,
        is_dir_hint,
    })
}

/// Parse a `[DELETE] <path>` line; the remainder is parsed like any entry line
pub fn parse_delete_marker<FS: FileSystem + ?Sized>(
    fs: &FS,
    root: &Path,
    raw: &str,
) -> Result<DeleteMarker, ValidationError> {
    let remainder = strip_delete_marker(raw);
    if remainder.trim().is_empty() {
        return Err(ValidationError::new("Delete marker missing a path."));
    }
    let entry = parse_entry(fs, root, remainder)?;
    Ok(DeleteMarker::from_entry(raw, entry))
}

/// Whether the trimmed line starts with the delete sentinel, ignoring case
pub fn is_delete_marker_line(line: &str) -> bool {
    line.trim()
        .get(..DELETE_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DELETE_MARKER))
}

/// Remove the delete sentinel and the whitespace after it; other lines pass through
pub fn strip_delete_marker(line: &str) -> &str {
    if !is_delete_marker_line(line) {
        return line;
    }
    line.trim()[DELETE_MARKER.len()..].trim_start()
}

/// Add the sentinel to an unmarked line, or remove it from a marked one
///
/// Blank lines are returned unchanged.
pub fn toggle_delete_marker(line: &str) -> String {
    let text = line.trim_end_matches(['\n', '\r']);
    if text.trim().is_empty() {
        return text.to_string();
    }
    if is_delete_marker_line(text) {
        return strip_delete_marker(text).to_string();
    }
    format!("{} {}", DELETE_MARKER, text.trim())
}
