//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::apply::DEFAULT_TEMP_SUFFIX;
use crate::application::ApplyOptions;
use crate::error::CliptreeResult;
use crate::infrastructure::fs::ScanOptions;

use super::loader::{self, ConfigWarning};

/// Directory listing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// List dot-files
    #[serde(default)]
    pub show_hidden: bool,
}

/// Plan execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyConfig {
    /// Suffix for temporary names used while breaking move cycles
    #[serde(default = "default_temp_suffix")]
    pub temp_suffix: String,

    /// Ask before deletes and overwrites
    #[serde(default = "default_true")]
    pub confirm: bool,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            temp_suffix: default_temp_suffix(),
            confirm: true,
        }
    }
}

fn default_temp_suffix() -> String {
    DEFAULT_TEMP_SUFFIX.to_string()
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub apply: ApplyConfig,
}

impl Config {
    /// Load configuration and collect warnings for unknown keys
    pub fn load_with_warnings(path: &Path) -> CliptreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Scanner options derived from this config
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            show_hidden: self.browser.show_hidden,
        }
    }

    /// Executor options derived from this config
    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions::new().with_temp_suffix(self.apply.temp_suffix.clone())
    }
}
