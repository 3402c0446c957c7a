//! Error types for cliptree
//!
//! Uses `thiserror` for library errors. Parse errors, validation errors and
//! per-operation apply failures are plain data on the plan and report, not
//! variants here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cliptree operations
pub type CliptreeResult<T> = Result<T, CliptreeError>;

/// Main error type for cliptree operations
#[derive(Error, Debug)]
pub enum CliptreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Root directory for a listing does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Root exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Listing the root directory failed
    #[error("failed to read directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the edited buffer failed
    #[error("failed to read edited buffer {path}: {source}")]
    Buffer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Plan has validation errors and must not be applied
    #[error("plan has {count} validation error(s)")]
    PlanRejected { count: usize },

    /// Apply was declined by the user
    #[error("apply aborted by user")]
    ApplyAborted,
}
