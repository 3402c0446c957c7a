//! Domain Entities
//!
//! The listing rows, parsed buffer lines, operations, the plan built from
//! them, and the report produced by applying it.

pub mod apply_report;
pub mod edited_entry;
pub mod operation;
pub mod path_entry;
pub mod plan;

pub use apply_report::{ApplyReport, ApplyResult, ApplyStatus};
pub use edited_entry::{DeleteMarker, EditedEntry};
pub use operation::{Operation, OperationKind};
pub use path_entry::PathEntry;
pub use plan::OperationPlan;
