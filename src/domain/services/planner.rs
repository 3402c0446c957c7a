//! Diff planner
//!
//! Reconstructs intent from an edited listing: aligns the original entries
//! against the parsed buffer lines and classifies every original entry as
//! kept, moved or deleted, and every unmatched edited line as a create.
//! Reads the filesystem only through `FileSystem::resolve`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use super::aligner::{align, AlignTag};
use super::line_parser::{parse_line, ParsedLine};
use crate::domain::entities::{DeleteMarker, EditedEntry, Operation, OperationPlan, PathEntry};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{normalized_key, relative_to_root, ValidationError};

/// What happens to one original entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Keep,
    /// Move to the edited entry at this index
    Move(usize),
    Delete,
}

/// Compute the plan for one apply attempt
///
/// `original` must be in the order the listing was shown; `edited_lines` in
/// on-screen order. Blank lines are ignored.
pub fn compute_plan<FS, S>(
    fs: &FS,
    root: &Path,
    original: &[PathEntry],
    edited_lines: &[S],
) -> OperationPlan
where
    FS: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let root = fs.resolve(root);

    let original_keys: Vec<String> = original
        .iter()
        .map(|entry| original_key(fs, &root, &entry.path))
        .collect();

    let mut parse_errors = Vec::new();
    let mut edited_entries: Vec<EditedEntry> = Vec::new();
    let mut delete_markers: Vec<DeleteMarker> = Vec::new();
    for raw in edited_lines {
        match parse_line(fs, &root, raw.as_ref()) {
            ParsedLine::Blank => {}
            ParsedLine::Entry(entry) => edited_entries.push(entry),
            ParsedLine::Delete(marker) => delete_markers.push(marker),
            ParsedLine::Error(err) => parse_errors.push(err),
        }
    }

    let edited_keys: Vec<&str> = edited_entries
        .iter()
        .map(|entry| entry.normalized_key.as_str())
        .collect();
    let original_key_refs: Vec<&str> = original_keys.iter().map(String::as_str).collect();

    let mut dispositions = vec![Disposition::Keep; original.len()];
    let mut creates: Vec<usize> = Vec::new();

    for op in align(&original_key_refs, &edited_keys) {
        match op.tag {
            AlignTag::Equal => {}
            AlignTag::Delete => {
                for idx in op.old {
                    dispositions[idx] = Disposition::Delete;
                }
            }
            AlignTag::Insert => creates.extend(op.new),
            AlignTag::Replace => {
                let paired = op.old.len().min(op.new.len());
                for (orig_idx, edit_idx) in op.old.clone().zip(op.new.clone()) {
                    dispositions[orig_idx] = Disposition::Move(edit_idx);
                }
                for idx in op.old.skip(paired) {
                    dispositions[idx] = Disposition::Delete;
                }
                creates.extend(op.new.skip(paired));
            }
        }
    }

    apply_delete_markers(
        &delete_markers,
        &original_keys,
        &edited_keys,
        &mut dispositions,
        &mut parse_errors,
    );

    let mut operations = Vec::new();
    for (entry, disposition) in original.iter().zip(&dispositions) {
        match *disposition {
            Disposition::Keep => {}
            Disposition::Move(edit_idx) => {
                let target = &edited_entries[edit_idx].resolved_path;
                if fs.resolve(&entry.path) == *target {
                    continue;
                }
                operations.push(Operation::move_entry(
                    entry.path.clone(),
                    target.clone(),
                    entry.is_dir,
                ));
            }
            Disposition::Delete => {
                operations.push(Operation::delete(entry.path.clone(), entry.is_dir));
            }
        }
    }
    for idx in creates {
        let entry = &edited_entries[idx];
        let op = if entry.is_dir_hint {
            Operation::create_dir(entry.resolved_path.clone())
        } else {
            Operation::create_file(entry.resolved_path.clone())
        };
        operations.push(op);
    }

    for op in &operations {
        debug!(kind = %op.kind(), source = ?op.source(), target = ?op.target(), "planned operation");
    }
    debug!(
        operations = operations.len(),
        parse_errors = parse_errors.len(),
        "computed plan"
    );

    OperationPlan {
        root,
        operations,
        original_entries: original.to_vec(),
        edited_entries,
        delete_markers,
        parse_errors,
    }
}

/// Force marked entries to delete, reporting markers that are ambiguous
fn apply_delete_markers(
    markers: &[DeleteMarker],
    original_keys: &[String],
    edited_keys: &[&str],
    dispositions: &mut [Disposition],
    errors: &mut Vec<ValidationError>,
) {
    let index_by_key: HashMap<&str, usize> = original_keys
        .iter()
        .enumerate()
        .map(|(idx, key)| (key.as_str(), idx))
        .collect();
    let edited_set: HashSet<&str> = edited_keys.iter().copied().collect();

    for marker in markers {
        let Some(&idx) = index_by_key.get(marker.normalized_key.as_str()) else {
            errors.push(ValidationError::at(
                "Delete marker does not match existing entry.",
                &marker.resolved_path,
            ));
            continue;
        };
        if edited_set.contains(marker.normalized_key.as_str()) {
            errors.push(ValidationError::at(
                "Delete marker conflicts with an edited entry.",
                &marker.resolved_path,
            ));
            continue;
        }
        if matches!(dispositions[idx], Disposition::Move(_)) {
            errors.push(ValidationError::at(
                "Delete marker conflicts with a rename/move.",
                &marker.resolved_path,
            ));
            continue;
        }
        dispositions[idx] = Disposition::Delete;
    }
}

/// Alignment key of an original entry; entries outside the root fall back to their name
fn original_key<FS: FileSystem + ?Sized>(fs: &FS, root: &Path, path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    let resolved = fs.resolve(&absolute);
    match relative_to_root(root, &resolved) {
        Some(rel) => normalized_key(&rel),
        None => resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OperationKind;
    use crate::infrastructure::fs::MemoryFs;
    use std::path::PathBuf;

    fn fixture() -> (MemoryFs, PathBuf) {
        let fs = MemoryFs::new();
        fs.add_dir("/clips/dir1");
        fs.add_file("/clips/a.txt", "a");
        fs.add_file("/clips/b.txt", "b");
        (fs, PathBuf::from("/clips"))
    }

    fn originals(root: &Path) -> Vec<PathEntry> {
        vec![PathEntry::file(root.join("a.txt")), PathEntry::file(root.join("b.txt"))]
    }

    fn rel_pairs(plan: &OperationPlan) -> Vec<(String, String)> {
        plan.operations_of(OperationKind::Move)
            .map(|op| {
                let rel = |p: &Path| {
                    normalized_key(p.strip_prefix(&plan.root).unwrap())
                };
                (rel(op.source().unwrap()), rel(op.target().unwrap()))
            })
            .collect()
    }

    #[test]
    fn identical_listing_yields_no_operations() {
        let (fs, root) = fixture();
        let original = vec![
            PathEntry::dir(root.join("dir1")),
            PathEntry::file(root.join("a.txt")),
            PathEntry::file(root.join("b.txt")),
        ];
        let plan = compute_plan(&fs, &root, &original, &["dir1/", "a.txt", "b.txt"]);
        assert!(plan.is_empty());
        assert!(plan.parse_errors.is_empty());
    }

    #[test]
    fn whitespace_only_changes_are_kept() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["  a.txt", "./b.txt  "]);
        assert!(plan.is_empty());
    }

    #[test]
    fn rename_and_move_are_detected() {
        let (fs, root) = fixture();
        let original = vec![
            PathEntry::dir(root.join("dir1")),
            PathEntry::file(root.join("a.txt")),
            PathEntry::file(root.join("b.txt")),
        ];
        let plan = compute_plan(
            &fs,
            &root,
            &original,
            &["dir1/", "a_renamed.txt", "sub/b.txt", "new.txt"],
        );

        let pairs = rel_pairs(&plan);
        assert!(pairs.contains(&("a.txt".into(), "a_renamed.txt".into())));
        assert!(pairs.contains(&("b.txt".into(), "sub/b.txt".into())));
        assert_eq!(plan.count(OperationKind::Delete), 0);

        let creates: Vec<_> = plan.operations_of(OperationKind::CreateFile).collect();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].target(), Some(root.join("new.txt").as_path()));
    }

    #[test]
    fn two_renames_pair_positionally() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["a_renamed.txt", "sub/b.txt"]);
        assert_eq!(plan.operations.len(), 2);
        assert_eq!(
            rel_pairs(&plan),
            vec![
                ("a.txt".to_string(), "a_renamed.txt".to_string()),
                ("b.txt".to_string(), "sub/b.txt".to_string())
            ]
        );
    }

    #[test]
    fn removed_line_is_delete() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["a.txt"]);
        assert_eq!(
            plan.operations,
            vec![Operation::delete(root.join("b.txt"), false)]
        );
    }

    #[test]
    fn delete_marker_matches_implicit_delete() {
        let (fs, root) = fixture();
        let implicit = compute_plan(&fs, &root, &originals(&root), &["a.txt"]);
        let marked = compute_plan(&fs, &root, &originals(&root), &["a.txt", "[DELETE] b.txt"]);
        assert_eq!(implicit.operations, marked.operations);
        assert!(marked.parse_errors.is_empty());
        assert_eq!(marked.delete_markers.len(), 1);
    }

    #[test]
    fn marker_in_place_deletes_directory() {
        let (fs, root) = fixture();
        let original = vec![PathEntry::dir(root.join("dir1")), PathEntry::file(root.join("a.txt"))];
        let plan = compute_plan(&fs, &root, &original, &["[DELETE] dir1/", "a.txt"]);
        assert_eq!(plan.operations, vec![Operation::delete(root.join("dir1"), true)]);
    }

    #[test]
    fn marker_without_match_is_error() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["a.txt", "b.txt", "[DELETE] zzz.txt"]);
        assert_eq!(plan.parse_errors.len(), 1);
        assert_eq!(
            plan.parse_errors[0].message,
            "Delete marker does not match existing entry."
        );
    }

    #[test]
    fn marker_conflicting_with_edited_entry_is_error() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["a.txt", "b.txt", "[DELETE] b.txt"]);
        assert_eq!(
            plan.parse_errors[0].message,
            "Delete marker conflicts with an edited entry."
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn marker_conflicting_with_move_is_error() {
        let (fs, root) = fixture();
        let plan = compute_plan(
            &fs,
            &root,
            &originals(&root),
            &["a.txt", "renamed.txt", "[DELETE] b.txt"],
        );
        assert_eq!(
            plan.parse_errors[0].message,
            "Delete marker conflicts with a rename/move."
        );
    }

    #[test]
    fn extra_edited_lines_in_replace_become_creates() {
        let (fs, root) = fixture();
        let original = vec![PathEntry::file(root.join("a.txt"))];
        let plan = compute_plan(&fs, &root, &original, &["x.txt", "y/"]);
        assert_eq!(
            plan.operations,
            vec![
                Operation::move_entry(root.join("a.txt"), root.join("x.txt"), false),
                Operation::create_dir(root.join("y")),
            ]
        );
    }

    #[test]
    fn extra_original_lines_in_replace_become_deletes() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["only.txt"]);
        assert_eq!(plan.count(OperationKind::Move), 1);
        assert_eq!(plan.count(OperationKind::Delete), 1);
    }

    #[test]
    fn blank_lines_never_produce_operations() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["", "a.txt", "   ", "b.txt", "\t"]);
        assert!(plan.is_empty());
        assert!(plan.parse_errors.is_empty());
    }

    #[test]
    fn parse_errors_are_kept_and_excluded_from_alignment() {
        let (fs, root) = fixture();
        let plan = compute_plan(&fs, &root, &originals(&root), &["a.txt", "../escape.txt", "b.txt"]);
        assert!(plan.is_empty());
        assert_eq!(plan.parse_errors.len(), 1);
        assert!(plan.parse_errors[0].message.contains("escapes"));
    }

    #[test]
    fn root_is_resolved() {
        let (fs, _) = fixture();
        let plan = compute_plan(&fs, Path::new("/clips/sub/.."), &[], &["new.txt"]);
        assert_eq!(plan.root, PathBuf::from("/clips"));
        assert_eq!(
            plan.operations,
            vec![Operation::create_file("/clips/new.txt")]
        );
    }
}
