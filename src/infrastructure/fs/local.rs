//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        resolve_non_strict(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        match std::fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err) if from.symlink_metadata().is_ok() => {
                // Typically a cross-device move; retry as copy + remove
                debug!(from = %from.display(), to = %to.display(), error = %err, "rename failed, copying instead");
                copy_then_remove(from, to).map_err(|_| FsError::from_io(from, err))
            }
            Err(err) => Err(FsError::from_io(from, err)),
        }
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// Absolute, symlink-resolved form of `path` that tolerates missing components
///
/// Existing prefixes are canonicalized one component at a time so that `..`
/// after a symlink walks up from the link target; the missing tail is
/// normalized lexically.
pub fn resolve_non_strict(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    let mut exists = true;
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
                exists = resolved.exists();
            }
            Component::Normal(part) => {
                resolved.push(part);
                if exists {
                    match dunce::canonicalize(&resolved) {
                        Ok(real) => resolved = real,
                        Err(_) => exists = false,
                    }
                }
            }
        }
    }
    resolved
}

/// Copy `from` to `to` and remove `from`; cleans up a partial copy on failure
fn copy_then_remove(from: &Path, to: &Path) -> std::io::Result<()> {
    let metadata = from.symlink_metadata()?;
    let copied = if metadata.is_dir() {
        copy_tree(from, to)
    } else {
        std::fs::copy(from, to).map(|_| ())
    };
    if let Err(err) = copied {
        let _ = if metadata.is_dir() {
            std::fs::remove_dir_all(to)
        } else {
            std::fs::remove_file(to)
        };
        return Err(err);
    }
    if metadata.is_dir() {
        std::fs::remove_dir_all(from)
    } else {
        std::fs::remove_file(from)
    }
}

fn copy_tree(from: &Path, to: &Path) -> std::io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(std::io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(std::io::Error::other)?;
        let dest = to.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn local_fs_create_file_is_exclusive() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("new.txt");
        let fs_impl = LocalFs::new();

        fs_impl.create_file(&file).unwrap();
        assert!(file.exists());

        let err = fs_impl.create_file(&file).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists(_)));
    }

    #[test]
    fn local_fs_create_dir_all() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let fs_impl = LocalFs::new();

        fs_impl.create_dir_all(&nested).unwrap();

        assert!(fs_impl.is_dir(&nested));
    }

    #[test]
    fn local_fs_rename_replaces_file() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "A").unwrap();
        fs::write(&b, "B").unwrap();

        LocalFs::new().rename(&a, &b).unwrap();

        assert!(!a.exists());
        assert_eq!(fs::read_to_string(&b).unwrap(), "A");
    }

    #[test]
    fn local_fs_rename_missing_source_fails() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .rename(&dir.path().join("missing"), &dir.path().join("other"))
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_remove_dir_all_removes_contents() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("folder");
        fs::create_dir_all(folder.join("inner")).unwrap();
        fs::write(folder.join("inner/clip.txt"), "x").unwrap();

        LocalFs::new().remove_dir_all(&folder).unwrap();

        assert!(!folder.exists());
    }

    #[test]
    fn copy_then_remove_moves_tree() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("from");
        let to = dir.path().join("to");
        fs::create_dir_all(from.join("sub")).unwrap();
        fs::write(from.join("sub/clip.txt"), "clip").unwrap();

        copy_then_remove(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(to.join("sub/clip.txt")).unwrap(), "clip");
    }

    #[test]
    fn resolve_handles_missing_tail() {
        let dir = tempdir().unwrap();
        let root = resolve_non_strict(dir.path());
        let resolved = resolve_non_strict(&dir.path().join("missing/../new.txt"));
        assert_eq!(resolved, root.join("new.txt"));
    }

    #[test]
    fn resolve_escapes_with_parent_dirs() {
        let dir = tempdir().unwrap();
        let root = resolve_non_strict(dir.path());
        let resolved = resolve_non_strict(&dir.path().join("../outside.txt"));
        assert!(!resolved.starts_with(&root));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_follows_symlinks() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("link")).unwrap();

        let resolved = resolve_non_strict(&dir.path().join("link/clip.txt"));
        assert_eq!(resolved, resolve_non_strict(&real).join("clip.txt"));
    }
}
