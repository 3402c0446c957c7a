//! Review Use Case
//!
//! Plan, validate, and collect confirmations for one edited buffer. The
//! result is what a caller shows before asking to apply.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{OperationPlan, PathEntry};
use crate::domain::ports::FileSystem;
use crate::domain::services::{collect_confirmations, compute_plan, validate_plan};
use crate::domain::value_objects::{Confirmation, ValidationError};

/// A computed plan with everything the caller needs to decide on it
#[derive(Debug, Clone, Serialize)]
pub struct PlanReview {
    pub plan: OperationPlan,
    /// Validation errors; the plan must not be applied unless empty
    pub errors: Vec<ValidationError>,
    /// Operations to confirm; only computed for a valid plan
    pub confirmations: Vec<Confirmation>,
}

impl PlanReview {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether there is anything to apply at all
    pub fn has_changes(&self) -> bool {
        !self.plan.is_empty()
    }
}

/// Build the review for `edited_lines` against the `original` listing of `root`
pub fn review_edits<FS, S>(
    fs: &FS,
    root: &Path,
    original: &[PathEntry],
    edited_lines: &[S],
) -> PlanReview
where
    FS: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let plan = compute_plan(fs, root, original, edited_lines);
    let errors = validate_plan(fs, &plan);
    let confirmations = if errors.is_empty() {
        collect_confirmations(fs, &plan)
    } else {
        Vec::new()
    };
    PlanReview {
        plan,
        errors,
        confirmations,
    }
}
