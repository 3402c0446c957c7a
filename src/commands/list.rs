//! List command handler
//!
//! Prints the editable listing of a directory.

use std::path::Path;

use anyhow::Result;

use cliptree::domain::services::render_listing;

use super::load_listing;

/// Execute the list command
pub fn cmd_list(root: &Path, hidden: bool) -> Result<()> {
    let listing = load_listing(root, hidden)?;
    for line in render_listing(&listing.root, &listing.entries) {
        println!("{line}");
    }
    Ok(())
}
