//! Validation error value object
//!
//! Shared by the line parser (parse errors) and the plan validator. Purely
//! informational: the caller decides how to present it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single parse or validation problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Human readable message
    pub message: String,
    /// Path the problem refers to, when there is one
    pub path: Option<PathBuf>,
}

impl ValidationError {
    /// Error without an associated path
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Error tied to a path
    pub fn at(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} ({})", self.message, path.display()),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_path() {
        let err = ValidationError::new("Edited line is empty after trimming.");
        assert_eq!(err.to_string(), "Edited line is empty after trimming.");
    }

    #[test]
    fn display_with_path() {
        let err = ValidationError::at("Duplicate target path.", "/clips/a.txt");
        assert_eq!(err.to_string(), "Duplicate target path. (/clips/a.txt)");
    }
}
