//! Domain Layer
//!
//! The planning engine: pure logic over listings and edited buffers.
//!
//! ## Structure
//!
//! - `entities/` - Listing rows, parsed lines, operations, plans, reports
//! - `value_objects/` - Path keys, validation errors, confirmations
//! - `services/` - Line parser, aligner, planner, validator, confirmations
//! - `policies/` - Path naming rules
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No mutation** - This layer never changes the file system
//! 2. **Ports & Adapters** - Every filesystem query goes through `FileSystem`

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
