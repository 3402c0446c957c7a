//! Listing renderer
//!
//! Produces the editable text for a directory listing and splits an edited
//! buffer back into lines. Rendering and re-parsing an unedited listing is
//! the identity: the planner sees no changes.

use std::path::Path;

use crate::domain::entities::PathEntry;
use crate::domain::value_objects::{normalized_key, relative_to_root};

/// Render one listing line: root-relative POSIX path, `/` suffix for directories
pub fn render_entry(root: &Path, entry: &PathEntry) -> String {
    let text = match relative_to_root(root, &entry.path) {
        Some(rel) => normalized_key(&rel),
        None => entry.path.display().to_string(),
    };
    if entry.is_dir {
        format!("{text}/")
    } else {
        text
    }
}

/// Render a whole listing, one line per entry, in the given order
pub fn render_listing(root: &Path, entries: &[PathEntry]) -> Vec<String> {
    entries.iter().map(|entry| render_entry(root, entry)).collect()
}

/// Split edited buffer text into raw lines (`\n` or `\r\n`)
pub fn buffer_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_directories_with_slash() {
        let root = Path::new("/clips");
        let lines = render_listing(
            root,
            &[PathEntry::dir("/clips/raw"), PathEntry::file("/clips/intro.mp4")],
        );
        assert_eq!(lines, vec!["raw/", "intro.mp4"]);
    }

    #[test]
    fn entries_outside_root_render_absolute() {
        let line = render_entry(Path::new("/clips"), &PathEntry::file("/other/a.txt"));
        assert_eq!(line, Path::new("/other/a.txt").display().to_string());
    }

    #[test]
    fn buffer_lines_handles_crlf() {
        assert_eq!(buffer_lines("a.txt\r\nb.txt\n"), vec!["a.txt", "b.txt"]);
    }
}
