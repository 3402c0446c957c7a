//! OperationPlan entity
//!
//! Built once per apply attempt from the original listing and the edited
//! buffer. Never mutated after construction and never persisted.

use std::path::PathBuf;

use serde::Serialize;

use super::{DeleteMarker, EditedEntry, Operation, OperationKind, PathEntry};
use crate::domain::value_objects::ValidationError;

/// The computed set of filesystem changes plus the inputs it was derived from
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationPlan {
    /// Resolved listing root
    pub root: PathBuf,
    /// Operations in emission order: moves/deletes in listing order, then creates
    pub operations: Vec<Operation>,
    pub original_entries: Vec<PathEntry>,
    pub edited_entries: Vec<EditedEntry>,
    pub delete_markers: Vec<DeleteMarker>,
    /// Line-level problems found while parsing the buffer
    pub parse_errors: Vec<ValidationError>,
}

impl OperationPlan {
    /// A plan made of explicit operations only, without listing context
    pub fn from_operations(root: impl Into<PathBuf>, operations: Vec<Operation>) -> Self {
        Self {
            root: root.into(),
            operations,
            ..Self::default()
        }
    }

    /// True when applying the plan would change nothing
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn has_parse_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }

    /// Operations of one kind, in plan order
    pub fn operations_of(&self, kind: OperationKind) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(move |op| op.kind() == kind)
    }

    /// Count operations of one kind
    pub fn count(&self, kind: OperationKind) -> usize {
        self.operations_of(kind).count()
    }
}
