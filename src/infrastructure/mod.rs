//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (local disk, in-memory) and the scanner
//! - `events/` - Apply event sinks (NDJSON)

pub mod events;
pub mod fs;

pub use events::JsonEventSink;
pub use fs::{scan_directory, LocalFs, MemoryFs, ScanOptions};
