//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting of plans, confirmations, errors and reports
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `output` - Text rendering

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{
    display_path, format_confirmations, format_operation, format_plan, format_plan_styled,
    format_report, format_report_styled, format_validation_error, format_validation_errors,
    report_summary,
};
