//! Apply results - the per-operation outcome of executing a plan

use std::fmt;

use serde::Serialize;

use super::Operation;

/// Outcome of one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyStatus {
    Ok,
    Error,
    Skipped,
}

impl ApplyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyStatus::Ok => "ok",
            ApplyStatus::Error => "error",
            ApplyStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for ApplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyResult {
    pub operation: Operation,
    pub status: ApplyStatus,
    /// OS error text or skip reason
    pub message: Option<String>,
}

impl ApplyResult {
    pub fn ok(operation: Operation) -> Self {
        Self {
            operation,
            status: ApplyStatus::Ok,
            message: None,
        }
    }

    pub fn error(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            status: ApplyStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn skipped(operation: Operation, reason: impl Into<String>) -> Self {
        Self {
            operation,
            status: ApplyStatus::Skipped,
            message: Some(reason.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ApplyStatus::Error
    }
}

/// All results of one apply, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub results: Vec<ApplyResult>,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ApplyResult) {
        self.results.push(result);
    }

    fn count(&self, status: ApplyStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn ok_count(&self) -> usize {
        self.count(ApplyStatus::Ok)
    }

    pub fn error_count(&self) -> usize {
        self.count(ApplyStatus::Error)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(ApplyStatus::Skipped)
    }

    /// Whether any operation failed
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(ApplyResult::is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_status() {
        let mut report = ApplyReport::new();
        report.push(ApplyResult::ok(Operation::create_file("/r/a")));
        report.push(ApplyResult::skipped(
            Operation::create_dir("/r/b"),
            "Directory already exists.",
        ));
        report.push(ApplyResult::error(
            Operation::delete("/r/c", false),
            "No such file or directory",
        ));

        assert_eq!(report.ok_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn empty_report_has_no_errors() {
        let report = ApplyReport::new();
        assert!(!report.has_errors());
        assert_eq!(report.ok_count(), 0);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ApplyStatus::Skipped).unwrap(),
            serde_json::json!("skipped")
        );
    }
}
