//! Apply Use Case
//!
//! Executes a validated plan against the file system.
//!
//! This module handles:
//! - Creating files and directories
//! - Ordering moves and breaking rename cycles with temporary names
//! - Deleting files, then directories deepest first

mod moves;
mod options;
mod use_case;


pub use moves::{order_moves, MoveSchedule, MoveStep};
pub use options::{ApplyOptions, DEFAULT_TEMP_SUFFIX};
pub use use_case::{apply_plan, ApplyUseCase};
