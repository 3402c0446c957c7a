//! cliptree - edit a directory listing as text, then apply it
//!
//! A directory is shown as one root-relative path per line. The user edits
//! the text (renames, moves, new lines, removed lines, `[DELETE]` markers);
//! cliptree aligns the edited lines with the original listing, plans the
//! filesystem operations, validates them, and applies them in an order that
//! survives rename cycles such as swapping two names.
//!
//! ```ignore
//! use cliptree::application::{apply_plan, review_edits};
//! use cliptree::infrastructure::{scan_directory, LocalFs, ScanOptions};
//!
//! let entries = scan_directory(root, &ScanOptions::default())?;
//! let review = review_edits(&LocalFs, root, &entries, &edited_lines);
//! if review.is_valid() {
//!     let report = apply_plan(&LocalFs, &review.plan);
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{apply_plan, review_edits, ApplyOptions, ApplyUseCase, PlanReview};
pub use config::Config;
pub use domain::entities::{
    ApplyReport, ApplyResult, ApplyStatus, Operation, OperationKind, OperationPlan, PathEntry,
};
pub use domain::services::{collect_confirmations, compute_plan, validate_plan};
pub use domain::value_objects::{ConfirmReason, Confirmation, ValidationError};
pub use error::{CliptreeError, CliptreeResult};
pub use infrastructure::{scan_directory, LocalFs, MemoryFs, ScanOptions};
