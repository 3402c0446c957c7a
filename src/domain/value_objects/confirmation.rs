//! Confirmation value object
//!
//! An operation the caller should confirm interactively before applying.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::Operation;

/// Why an operation needs confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmReason {
    /// The operation deletes an entry
    Delete,
    /// The operation replaces an existing file
    Overwrite,
}

impl fmt::Display for ConfirmReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmReason::Delete => write!(f, "Confirm delete"),
            ConfirmReason::Overwrite => write!(f, "Confirm overwrite"),
        }
    }
}

/// A risky operation surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub operation: Operation,
    pub reason: ConfirmReason,
}

impl Confirmation {
    pub fn new(operation: Operation, reason: ConfirmReason) -> Self {
        Self { operation, reason }
    }
}
