//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CliptreeError, CliptreeResult};

use super::types::Config;

/// Per-directory config file name
pub const PROJECT_CONFIG_FILE: &str = ".cliptree.toml";

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file where the key was found
    pub file: PathBuf,
    /// 1-indexed line, if the key could be located
    pub line: Option<usize>,
    /// Closest known key, if any is near enough
    pub suggestion: Option<String>,
}

/// A loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> CliptreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CliptreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config file candidates for a listing root, highest priority first
pub fn config_candidates(root: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("cliptree").join("config.toml"));
    }
    candidates
}

/// Load the first existing config among `candidates`, then apply env overrides
///
/// A file that fails to parse is an error; missing files fall through to the
/// next candidate and finally to defaults.
pub fn load_from_candidates(candidates: &[PathBuf]) -> CliptreeResult<LoadedConfig> {
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(path)?;
        debug!(path = %path.display(), "loaded config");
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            warnings,
            source: Some(path.clone()),
        });
    }
    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

/// Load the config that applies to `root`
pub fn load_for_root(root: &Path) -> CliptreeResult<LoadedConfig> {
    load_from_candidates(&config_candidates(root))
}

/// Apply environment variable overrides (CLIPTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("CLIPTREE_SHOW_HIDDEN") {
        if let Some(flag) = parse_flag("CLIPTREE_SHOW_HIDDEN", &value) {
            config.browser.show_hidden = flag;
        }
    }

    if let Some(value) = lookup("CLIPTREE_TEMP_SUFFIX") {
        let value = value.trim();
        if !value.is_empty() {
            config.apply.temp_suffix = value.to_string();
        }
    }

    if let Some(value) = lookup("CLIPTREE_CONFIRM") {
        if let Some(flag) = parse_flag("CLIPTREE_CONFIRM", &value) {
            config.apply.confirm = flag;
        }
    }

    config
}

fn parse_flag(name: &str, value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!(variable = name, value = other, "ignoring invalid boolean");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["browser", "show_hidden", "apply", "temp_suffix", "confirm"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
