//! Apply options

/// Default suffix for temporary names used to break move cycles
pub const DEFAULT_TEMP_SUFFIX: &str = ".cliptree_tmp";

/// Options for applying a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Appended to an entry name to park it while breaking a cycle
    pub temp_suffix: String,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            temp_suffix: DEFAULT_TEMP_SUFFIX.to_string(),
        }
    }
}

impl ApplyOptions {
    /// Create new apply options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the temporary name suffix; an empty suffix keeps the default
    pub fn with_temp_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if !suffix.is_empty() {
            self.temp_suffix = suffix;
        }
        self
    }
}
