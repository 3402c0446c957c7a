//! Confirmation extractor
//!
//! Picks the operations of a validated plan the caller should confirm before
//! applying: every delete, and every file move that replaces an existing file.

use crate::domain::entities::{Operation, OperationPlan};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ConfirmReason, Confirmation};

/// Collect the confirmations for a plan, in plan order
pub fn collect_confirmations<FS: FileSystem + ?Sized>(
    fs: &FS,
    plan: &OperationPlan,
) -> Vec<Confirmation> {
    plan.operations
        .iter()
        .filter_map(|op| {
            confirmation_reason(fs, op).map(|reason| Confirmation::new(op.clone(), reason))
        })
        .collect()
}

fn confirmation_reason<FS: FileSystem + ?Sized>(fs: &FS, op: &Operation) -> Option<ConfirmReason> {
    match op {
        Operation::Delete { .. } => Some(ConfirmReason::Delete),
        Operation::Move {
            source,
            target,
            is_dir,
        } => {
            let overwrites_file = !*is_dir
                && fs.exists(target)
                && !fs.is_dir(target)
                && fs.resolve(source) != fs.resolve(target);
            overwrites_file.then_some(ConfirmReason::Overwrite)
        }
        Operation::CreateFile { .. } | Operation::CreateDir { .. } => None,
    }
}
