//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the directory scanner.

mod local;
mod memory;
mod scan;

pub use local::{resolve_non_strict, LocalFs};
pub use memory::MemoryFs;
#[cfg(test)]
pub(crate) use memory::CaseFoldingFs;
pub use scan::{scan_directory, ScanOptions};
