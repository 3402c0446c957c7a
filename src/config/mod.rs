//! Configuration module for cliptree
//!
//! Lookup order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (CLIPTREE_*)
//! 3. Directory config (`<root>/.cliptree.toml`)
//! 4. User config (`<config_dir>/cliptree/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    config_candidates, load_for_root, load_from_candidates, load_with_warnings,
    with_env_overrides, with_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ApplyConfig, BrowserConfig, Config};
