//! Plan validator
//!
//! Reports every safety problem in a computed plan without touching the
//! plan or the disk. All checks run; nothing short-circuits.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::{Operation, OperationPlan};
use crate::domain::policies::check_relative_path;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{relative_to_root, PathKey, ValidationError};

/// Validate a plan; an empty result means it is safe to apply
pub fn validate_plan<FS: FileSystem + ?Sized>(fs: &FS, plan: &OperationPlan) -> Vec<ValidationError> {
    let mut errors = plan.parse_errors.clone();
    let root = fs.resolve(&plan.root);

    let mut edited_keys = HashSet::new();
    for entry in &plan.edited_entries {
        if !edited_keys.insert(PathKey::new(&entry.resolved_path)) {
            errors.push(ValidationError::at(
                "Duplicate edited path.",
                &entry.resolved_path,
            ));
        }
        if let Some(message) = naming_error(fs, &root, &entry.resolved_path) {
            errors.push(ValidationError::at(message, &entry.resolved_path));
        }
    }

    let mut target_keys = HashSet::new();
    for target in plan.operations.iter().filter_map(Operation::target) {
        if !target_keys.insert(PathKey::new(target)) {
            errors.push(ValidationError::at("Duplicate target path.", target));
        }
    }

    let planned_dirs = planned_dirs(fs, &root, plan);
    for op in &plan.operations {
        if let Some(source) = op.source() {
            if !is_within_root(fs, &root, source) {
                errors.push(ValidationError::at(
                    "Source is outside the current root.",
                    source,
                ));
            }
        }
        if let Some(target) = op.target() {
            if !is_within_root(fs, &root, target) {
                errors.push(ValidationError::at(
                    "Target is outside the current root.",
                    target,
                ));
            }
            if let Some(parent) = target.parent() {
                let parent_key = PathKey::new(&fs.resolve(parent));
                if !planned_dirs.contains(&parent_key) && !fs.exists(parent) {
                    errors.push(ValidationError::at("Target parent does not exist.", target));
                }
            }
        }

        match op {
            Operation::Move {
                source,
                target,
                is_dir,
            } => {
                // A case-only rename on a case-insensitive volume names the same entry
                let same_entry = fs.resolve(source) == fs.resolve(target);
                if *is_dir && !same_entry && fs.resolve(target).starts_with(fs.resolve(source)) {
                    errors.push(ValidationError::at(
                        "Cannot move a directory into itself.",
                        target,
                    ));
                }
                if fs.exists(target) && !same_entry {
                    if *is_dir {
                        errors.push(ValidationError::at(
                            "Target directory already exists.",
                            target,
                        ));
                    } else if fs.is_dir(target) {
                        errors.push(ValidationError::at(
                            "Target is an existing directory.",
                            target,
                        ));
                    }
                }
            }
            Operation::CreateFile { target } => {
                if fs.exists(target) {
                    errors.push(ValidationError::at("Target file already exists.", target));
                }
            }
            Operation::CreateDir { target } => {
                if fs.exists(target) && !fs.is_dir(target) {
                    errors.push(ValidationError::at(
                        "Target exists and is not a directory.",
                        target,
                    ));
                }
            }
            Operation::Delete { .. } => {}
        }
    }

    errors
}

/// Component-level naming problems of an edited path
fn naming_error<FS: FileSystem + ?Sized>(fs: &FS, root: &Path, path: &Path) -> Option<&'static str> {
    let resolved = fs.resolve(path);
    let Some(rel) = relative_to_root(root, &resolved) else {
        return Some("Path escapes the current root.");
    };
    if rel.as_os_str().is_empty() {
        return Some("Path resolves to the root directory.");
    }
    check_relative_path(&rel).err().map(|violation| violation.message())
}

fn is_within_root<FS: FileSystem + ?Sized>(fs: &FS, root: &Path, path: &Path) -> bool {
    fs.resolve(path).starts_with(root)
}

/// Directories that exist once the plan's creates have run
///
/// The root, every original directory entry, and every ancestor of a planned
/// directory create up to the root.
fn planned_dirs<FS: FileSystem + ?Sized>(
    fs: &FS,
    root: &Path,
    plan: &OperationPlan,
) -> HashSet<PathKey> {
    let mut dirs = HashSet::new();
    dirs.insert(PathKey::new(root));
    for entry in plan.original_entries.iter().filter(|entry| entry.is_dir) {
        dirs.insert(PathKey::new(&fs.resolve(&entry.path)));
    }
    for op in &plan.operations {
        let Operation::CreateDir { target } = op else {
            continue;
        };
        let resolved = fs.resolve(target);
        let mut current = Some(resolved.as_path());
        while let Some(dir) = current {
            dirs.insert(PathKey::new(dir));
            if dir == root {
                break;
            }
            current = dir.parent();
        }
    }
    dirs
}
