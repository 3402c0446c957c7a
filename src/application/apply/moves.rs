//! Move scheduling
//!
//! Orders the moves of a plan so that no rename clobbers an entry another
//! pending move still has to read. Pending moves form a graph where a move
//! is blocked while its target is the source of another pending move.
//! Unblocked moves run first; when only cycles remain, the first pending move
//! is parked under a temporary name and a move from that name to its real
//! target is queued. Every park replaces a listing source with a fresh name
//! that no move targets, so the loop ends after at most one park per move.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::Operation;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::PathKey;

/// One rename to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveStep {
    /// Plan index of the move this step belongs to
    pub origin: usize,
    pub source: PathBuf,
    pub target: PathBuf,
    pub is_dir: bool,
    /// The step parks the entry under a temporary name
    pub parks: bool,
    /// Listing path the entry had before it was parked
    pub parked_from: Option<PathBuf>,
}

/// The ordered steps plus the moves that need no rename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSchedule {
    pub steps: Vec<MoveStep>,
    /// Plan indices of moves whose source and target are the same path
    pub unchanged: Vec<usize>,
}

/// Schedule the moves among `operations`; other kinds are ignored
pub fn order_moves<FS: FileSystem + ?Sized>(
    fs: &FS,
    operations: &[(usize, &Operation)],
    temp_suffix: &str,
) -> MoveSchedule {
    let mut schedule = MoveSchedule::default();
    let mut pending: Vec<MoveStep> = Vec::new();

    for (index, op) in operations {
        let Operation::Move {
            source,
            target,
            is_dir,
        } = op
        else {
            continue;
        };
        if source == target {
            schedule.unchanged.push(*index);
            continue;
        }
        pending.push(MoveStep {
            origin: *index,
            source: source.clone(),
            target: target.clone(),
            is_dir: *is_dir,
            parks: false,
            parked_from: None,
        });
    }

    let mut reserved: HashSet<PathKey> = pending
        .iter()
        .flat_map(|step| [PathKey::new(&step.source), PathKey::new(&step.target)])
        .collect();

    while !pending.is_empty() {
        let mut progress = false;
        let mut i = 0;
        while i < pending.len() {
            if is_blocked(&pending, i) {
                i += 1;
            } else {
                schedule.steps.push(pending.remove(i));
                progress = true;
            }
        }
        if progress {
            continue;
        }

        let item = pending.remove(0);
        let temp = unique_temp_path(fs, &item.source, temp_suffix, &reserved);
        reserved.insert(PathKey::new(&temp));
        schedule.steps.push(MoveStep {
            origin: item.origin,
            source: item.source.clone(),
            target: temp.clone(),
            is_dir: item.is_dir,
            parks: true,
            parked_from: None,
        });
        pending.push(MoveStep {
            source: temp,
            parked_from: Some(item.source),
            ..item
        });
    }

    schedule
}

/// Whether the target of `pending[index]` is still the source of another move
fn is_blocked(pending: &[MoveStep], index: usize) -> bool {
    let target = PathKey::new(&pending[index].target);
    pending
        .iter()
        .enumerate()
        .any(|(j, other)| j != index && PathKey::new(&other.source) == target)
}

/// `<name><suffix>`, then `<name><suffix>_1`, `_2`, ... until nothing pending
/// or on disk uses the name
fn unique_temp_path<FS: FileSystem + ?Sized>(
    fs: &FS,
    source: &Path,
    suffix: &str,
    reserved: &HashSet<PathKey>,
) -> PathBuf {
    let parent = source.parent().unwrap_or(Path::new(""));
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = format!("{name}{suffix}");

    let mut candidate = parent.join(&base);
    let mut counter = 1;
    while reserved.contains(&PathKey::new(&candidate)) || fs.exists(&candidate) {
        candidate = parent.join(format!("{base}_{counter}"));
        counter += 1;
    }
    candidate
}
