//! Apply Event Port
//!
//! Observable progress of plan execution, for console progress, NDJSON
//! streams and tests.

use std::path::PathBuf;

use crate::domain::entities::ApplyResult;

/// Event emitted while a plan is applied
#[derive(Debug, Clone)]
pub enum ApplyEvent {
    /// Execution started
    Started {
        root: PathBuf,
        operation_count: usize,
    },

    /// A move was parked under a temporary name to break a cycle
    TempRename { source: PathBuf, temp: PathBuf },

    /// An operation reached its final status
    OperationFinished { index: usize, result: ApplyResult },

    /// Execution completed
    Completed {
        ok_count: usize,
        skipped_count: usize,
        error_count: usize,
    },
}

/// Trait for receiving apply events
pub trait ApplyEventSink: Send + Sync {
    /// Handle an apply event
    fn on_event(&self, event: ApplyEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ApplyEventSink for NoopEventSink {
    fn on_event(&self, _event: ApplyEvent) {}
}

/// Event sink that collects events in memory
#[derive(Default)]
pub struct CollectingEventSink {
    events: std::sync::Mutex<Vec<ApplyEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ApplyEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ApplyEventSink for CollectingEventSink {
    fn on_event(&self, event: ApplyEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
