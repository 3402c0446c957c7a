//! FileSystem port - the capability boundary for every OS-touching call
//!
//! The planner and validator only query (`exists`, `is_dir`, `resolve`).
//! The executor is the only caller of the mutating methods.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Path does not exist
    NotFound(PathBuf),
    /// Path already exists
    AlreadyExists(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other OS failure, with the OS error text preserved
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach a path to an `io::Error`, keeping the common kinds distinguishable
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => {
                write!(f, "No such file or directory: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "File exists: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "{}: {}", source, path.display()),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MemoryFs` - in-memory tree for planner/validator/executor tests
pub trait FileSystem {
    /// Check if anything exists at `path` (symlinks are followed)
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Make `path` absolute and resolve `.`, `..` and symlinks without
    /// requiring the path to exist
    fn resolve(&self, path: &Path) -> PathBuf;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create an empty file; fails if anything already exists at `path`
    fn create_file(&self, path: &Path) -> FsResult<()>;

    /// Rename `from` to `to`, replacing an existing file at `to`
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        (**self).resolve(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        (**self).create_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }
}
