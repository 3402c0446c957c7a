//! Path keys used for alignment and collision checks
//!
//! Two notions of "same path" live here:
//! - `normalized_key` is the exact, POSIX-style root-relative rendering used to
//!   align original and edited listings
//! - `PathKey` is a case-folded absolute key used only where a collision on a
//!   case-insensitive filesystem must be caught (duplicate targets, planned
//!   parent directories, move scheduling)

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Case-folded path key for collision detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);

impl PathKey {
    /// Build the key for a path
    pub fn new(path: &Path) -> Self {
        Self(path.to_string_lossy().to_lowercase())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Path> for PathKey {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&PathBuf> for PathKey {
    fn from(path: &PathBuf) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a root-relative path with forward slashes and no trailing slash
pub fn normalized_key(rel: &Path) -> String {
    let mut out = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

/// Path of `path` relative to `root`, or `None` when it lies outside
///
/// Both paths are expected to be resolved already.
pub fn relative_to_root(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Resolve `.` and `..` purely lexically, without touching the filesystem
///
/// `..` at the filesystem root stays at the root, matching how the OS treats it.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_key_folds_case() {
        assert_eq!(
            PathKey::new(Path::new("/clips/Intro.MP4")),
            PathKey::new(Path::new("/clips/intro.mp4"))
        );
    }

    #[test]
    fn normalized_key_uses_forward_slashes() {
        let rel = Path::new("sub").join("nested").join("b.txt");
        assert_eq!(normalized_key(&rel), "sub/nested/b.txt");
    }

    #[test]
    fn normalized_key_drops_trailing_slash() {
        assert_eq!(normalized_key(Path::new("dir1/")), "dir1");
    }

    #[test]
    fn relative_to_root_inside() {
        let rel = relative_to_root(Path::new("/root"), Path::new("/root/a/b.txt"));
        assert_eq!(rel, Some(PathBuf::from("a/b.txt")));
    }

    #[test]
    fn relative_to_root_outside() {
        assert!(relative_to_root(Path::new("/root"), Path::new("/other/a.txt")).is_none());
    }

    #[test]
    fn relative_to_root_is_component_wise() {
        assert!(relative_to_root(Path::new("/root"), Path::new("/rootfs/a.txt")).is_none());
    }

    #[test]
    fn lexical_normalize_handles_dots() {
        assert_eq!(
            lexical_normalize(Path::new("/root/./a/../b.txt")),
            PathBuf::from("/root/b.txt")
        );
    }

    #[test]
    fn lexical_normalize_clamps_at_filesystem_root() {
        assert_eq!(lexical_normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}
