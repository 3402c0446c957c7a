//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod apply_events;
pub mod file_system;

pub use apply_events::{ApplyEvent, ApplyEventSink, CollectingEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
