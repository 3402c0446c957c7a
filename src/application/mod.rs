//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `review_edits` - Plan, validate and collect confirmations for an edited buffer
//! - `ApplyUseCase` - Execute a validated plan (creates, moves, deletes)

pub mod apply;
pub mod review;

pub use apply::{apply_plan, ApplyOptions, ApplyUseCase};
pub use review::{review_edits, PlanReview};
