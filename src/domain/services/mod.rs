//! Domain Services
//!
//! Pure planning logic. Every filesystem query goes through the
//! `FileSystem` port; nothing here mutates the disk.

pub mod aligner;
pub mod confirmations;
pub mod line_parser;
pub mod listing;
pub mod planner;
pub mod validator;

pub use aligner::{align, AlignOp, AlignTag};
pub use confirmations::collect_confirmations;
pub use line_parser::{
    is_delete_marker_line, parse_delete_marker, parse_entry, parse_line, strip_delete_marker,
    toggle_delete_marker, ParsedLine, DELETE_MARKER,
};
pub use listing::{buffer_lines, render_entry, render_listing};
pub use planner::compute_plan;
pub use validator::validate_plan;
