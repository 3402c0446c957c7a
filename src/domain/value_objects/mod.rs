//! Value Objects
//!
//! Immutable types that are defined by their value rather than identity.

pub mod confirmation;
pub mod path_key;
pub mod validation_error;

pub use confirmation::{ConfirmReason, Confirmation};
pub use path_key::{lexical_normalize, normalized_key, relative_to_root, PathKey};
pub use validation_error::ValidationError;
