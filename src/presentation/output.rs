//! Output Rendering
//!
//! Text rendering of plans, confirmations, validation errors and apply
//! reports. Paths are shown relative to the listing root with `/` separators.
//! Colors are only applied to the verb/status label.

use std::path::Path;

use crossterm::style::{StyledContent, Stylize};

use crate::domain::entities::{ApplyReport, ApplyStatus, Operation, OperationPlan};
use crate::domain::value_objects::{normalized_key, Confirmation, ValidationError};

/// Render a path relative to `root`, or as-is when it lies outside
pub fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => normalized_key(rel),
        Err(_) => path.display().to_string(),
    }
}

/// `a.txt -> sub/b.txt` for moves; the single path for creates and deletes
pub fn format_operation(root: &Path, op: &Operation) -> String {
    match op {
        Operation::Move { source, target, .. } => format!(
            "{} -> {}",
            display_path(root, source),
            display_path(root, target)
        ),
        Operation::CreateFile { target } | Operation::CreateDir { target } => {
            display_path(root, target)
        }
        Operation::Delete { source, .. } => display_path(root, source),
    }
}

fn operation_verb(op: &Operation) -> &'static str {
    match op {
        Operation::CreateDir { .. } => "MKDIR",
        Operation::CreateFile { .. } => "CREATE",
        Operation::Move { .. } => "MOVE",
        Operation::Delete { .. } => "DELETE",
    }
}

fn paint_verb(op: &Operation, verb: String) -> StyledContent<String> {
    match op {
        Operation::CreateDir { .. } | Operation::CreateFile { .. } => verb.green(),
        Operation::Move { .. } => verb.yellow(),
        Operation::Delete { .. } => verb.red(),
    }
}

fn paint_status(status: ApplyStatus, label: String) -> StyledContent<String> {
    match status {
        ApplyStatus::Ok => label.green(),
        ApplyStatus::Skipped => label.dark_grey(),
        ApplyStatus::Error => label.red(),
    }
}

/// One `VERB path` line per operation
pub fn format_plan(root: &Path, plan: &OperationPlan, confirmations: &[Confirmation]) -> String {
    format_plan_styled(root, plan, confirmations, false)
}

/// `format_plan` with optional terminal colors
pub fn format_plan_styled(
    root: &Path,
    plan: &OperationPlan,
    confirmations: &[Confirmation],
    color: bool,
) -> String {
    if plan.is_empty() {
        return "No changes detected.".to_string();
    }
    plan.operations
        .iter()
        .map(|op| {
            let verb = operation_verb(op).to_string();
            let label = if color {
                paint_verb(op, verb).to_string()
            } else {
                verb
            };
            let mut line = format!("{} {}", label, format_operation(root, op));
            if let Some(confirmation) = confirmations.iter().find(|c| &c.operation == op) {
                line.push_str(&format!("  ({})", confirmation.reason));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per operation that needs approval
pub fn format_confirmations(root: &Path, confirmations: &[Confirmation]) -> String {
    confirmations
        .iter()
        .map(|c| format!("{}: {}", c.reason, format_operation(root, &c.operation)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `message (path)`, or just the message
pub fn format_validation_error(error: &ValidationError) -> String {
    error.to_string()
}

/// All validation errors, one per line
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(format_validation_error)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `STATUS  op | message` line per result
pub fn format_report(root: &Path, report: &ApplyReport) -> String {
    format_report_styled(root, report, false)
}

/// `format_report` with optional terminal colors
pub fn format_report_styled(root: &Path, report: &ApplyReport, color: bool) -> String {
    if report.results.is_empty() {
        return "No operations executed.".to_string();
    }
    report
        .results
        .iter()
        .map(|result| {
            let status = format!("{:7}", result.status.as_str().to_uppercase());
            let label = if color {
                paint_status(result.status, status).to_string()
            } else {
                status
            };
            let mut line = format!("{} {}", label, format_operation(root, &result.operation));
            if let Some(message) = &result.message {
                line.push_str(" | ");
                line.push_str(message);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Applied: N ok, M skipped, K failed.`
pub fn report_summary(report: &ApplyReport) -> String {
    format!(
        "Applied: {} ok, {} skipped, {} failed.",
        report.ok_count(),
        report.skipped_count(),
        report.error_count()
    )
}
