//! Domain Policies
//!
//! Business rules applied by the validator.

pub mod path_naming;

pub use path_naming::{check_component, check_relative_path, NamingViolation};
