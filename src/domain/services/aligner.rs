//! Sequence Aligner Domain Service
//!
//! Aligns two ordered sequences and reports contiguous runs as
//! equal / delete / insert / replace. A thin wrapper over `similar`'s LCS
//! diff so the planner can classify runs without knowing the algorithm.

use std::hash::Hash;
use std::ops::Range;

use similar::{capture_diff_slices, Algorithm, DiffTag};

/// Kind of aligned run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignTag {
    /// Items present unchanged on both sides
    Equal,
    /// Items only in the old sequence
    Delete,
    /// Items only in the new sequence
    Insert,
    /// A run of old items replaced by a run of new items
    Replace,
}

impl From<DiffTag> for AlignTag {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => AlignTag::Equal,
            DiffTag::Delete => AlignTag::Delete,
            DiffTag::Insert => AlignTag::Insert,
            DiffTag::Replace => AlignTag::Replace,
        }
    }
}

/// One contiguous run of an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignOp {
    pub tag: AlignTag,
    /// Indices into the old sequence (empty for inserts)
    pub old: Range<usize>,
    /// Indices into the new sequence (empty for deletes)
    pub new: Range<usize>,
}

impl AlignOp {
    pub fn new(tag: AlignTag, old: Range<usize>, new: Range<usize>) -> Self {
        Self { tag, old, new }
    }
}

/// Align `old` against `new`, returning runs in sequence order
///
/// The runs cover both inputs completely and without overlap; empty runs
/// are dropped.
pub fn align<T: Hash + Eq + Ord>(old: &[T], new: &[T]) -> Vec<AlignOp> {
    capture_diff_slices(Algorithm::Lcs, old, new)
        .into_iter()
        .map(|op| {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            AlignOp::new(tag.into(), old_range, new_range)
        })
        .filter(|op| !op.old.is_empty() || !op.new.is_empty())
        .collect()
}
