//! Plan command handler
//!
//! Computes and validates the plan for an edited listing without applying it.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use cliptree::application::review_edits;
use cliptree::domain::services::buffer_lines;
use cliptree::error::CliptreeError;
use cliptree::presentation::{format_confirmations, format_plan_styled, format_validation_errors};

use super::{load_listing, read_buffer};

/// Execute the plan command
pub fn cmd_plan(root: &Path, buffer: &Path, hidden: bool, json: bool) -> Result<()> {
    let listing = load_listing(root, hidden)?;
    let text = read_buffer(buffer)?;
    let review = review_edits(
        &listing.fs,
        &listing.root,
        &listing.entries,
        &buffer_lines(&text),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        let color = std::io::stdout().is_terminal();
        println!(
            "{}",
            format_plan_styled(&listing.root, &review.plan, &review.confirmations, color)
        );
        if !review.confirmations.is_empty() {
            println!();
            println!("Needs confirmation:");
            println!("{}", format_confirmations(&listing.root, &review.confirmations));
        }
    }

    if !review.is_valid() {
        eprintln!("{}", format_validation_errors(&review.errors));
        return Err(CliptreeError::PlanRejected {
            count: review.errors.len(),
        }
        .into());
    }
    Ok(())
}
