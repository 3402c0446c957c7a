//! Command handlers

mod apply;
mod list;
mod plan;

pub use apply::cmd_apply;
pub use list::cmd_list;
pub use plan::cmd_plan;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;

use cliptree::config::{self, Config};
use cliptree::domain::entities::PathEntry;
use cliptree::domain::ports::FileSystem;
use cliptree::error::{CliptreeError, CliptreeResult};
use cliptree::infrastructure::{scan_directory, LocalFs};

/// Resolved root, its config and its current listing
pub struct Listing {
    pub fs: LocalFs,
    pub root: PathBuf,
    pub config: Config,
    pub entries: Vec<PathEntry>,
}

/// Resolve `root`, load its config and scan it
pub fn load_listing(root: &Path, hidden: bool) -> Result<Listing> {
    let fs = LocalFs::new();
    let root = fs.resolve(root);

    let loaded = config::load_for_root(&root)?;
    for warning in &loaded.warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!("Warning: unknown config key '{}' in {}", warning.key, location),
        }
    }

    let mut config = loaded.config;
    config.browser.show_hidden |= hidden;
    let entries = scan_directory(&root, &config.scan_options())?;

    Ok(Listing {
        fs,
        root,
        config,
        entries,
    })
}

/// Read the edited buffer from a file, or stdin for `-`
pub fn read_buffer(path: &Path) -> CliptreeResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliptreeError::Buffer {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|source| CliptreeError::Buffer {
        path: path.to_path_buf(),
        source,
    })
}
