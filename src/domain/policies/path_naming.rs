//! Path naming policy
//!
//! Component rules every edited or created path must satisfy. The rules are
//! the union of what common desktop filesystems reject, so a listing edited on
//! one platform stays portable to the others.

use std::path::{Component, Path};

/// Characters no path component may contain
pub const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names reserved regardless of extension
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Why a path component was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingViolation {
    /// Empty, `.` or `..`
    InvalidComponent,
    /// Ends with a space or a dot
    TrailingSpaceOrDot,
    /// Contains a control or reserved character
    InvalidCharacters,
    /// A reserved device name such as `CON` or `com1.txt`
    ReservedName,
}

impl NamingViolation {
    pub fn message(&self) -> &'static str {
        match self {
            NamingViolation::InvalidComponent => "Path component is invalid.",
            NamingViolation::TrailingSpaceOrDot => "Path component ends with a space or dot.",
            NamingViolation::InvalidCharacters => "Path component contains invalid characters.",
            NamingViolation::ReservedName => "Path component uses a reserved name.",
        }
    }
}

impl std::fmt::Display for NamingViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Check a single path component
pub fn check_component(part: &str) -> Result<(), NamingViolation> {
    if part.is_empty() || part == "." || part == ".." {
        return Err(NamingViolation::InvalidComponent);
    }
    if part.ends_with(' ') || part.ends_with('.') {
        return Err(NamingViolation::TrailingSpaceOrDot);
    }
    if part
        .chars()
        .any(|c| (c as u32) < 32 || INVALID_CHARS.contains(&c))
    {
        return Err(NamingViolation::InvalidCharacters);
    }
    let base = part.split('.').next().unwrap_or(part);
    if RESERVED_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(base))
    {
        return Err(NamingViolation::ReservedName);
    }
    Ok(())
}

/// Check every component of a root-relative path, reporting the first violation
pub fn check_relative_path(rel: &Path) -> Result<(), NamingViolation> {
    let mut seen = false;
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                seen = true;
                check_component(&part.to_string_lossy())?;
            }
            _ => return Err(NamingViolation::InvalidComponent),
        }
    }
    if seen {
        Ok(())
    } else {
        Err(NamingViolation::InvalidComponent)
    }
}
