//! Apply command handler
//!
//! Computes, validates, confirms and applies the plan for an edited listing.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use cliptree::application::{review_edits, ApplyUseCase};
use cliptree::domain::ports::{ApplyEventSink, NoopEventSink};
use cliptree::domain::services::buffer_lines;
use cliptree::error::CliptreeError;
use cliptree::infrastructure::JsonEventSink;
use cliptree::presentation::{
    format_confirmations, format_plan_styled, format_report_styled, format_validation_errors,
    report_summary,
};

use super::{load_listing, read_buffer};

/// Execute the apply command
pub fn cmd_apply(
    root: &Path,
    buffer: &Path,
    hidden: bool,
    yes: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let listing = load_listing(root, hidden)?;
    let text = read_buffer(buffer)?;
    let review = review_edits(
        &listing.fs,
        &listing.root,
        &listing.entries,
        &buffer_lines(&text),
    );

    if !review.is_valid() {
        eprintln!("{}", format_validation_errors(&review.errors));
        return Err(CliptreeError::PlanRejected {
            count: review.errors.len(),
        }
        .into());
    }

    if !review.has_changes() {
        if !json {
            println!("No changes detected.");
        }
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    if !json {
        println!(
            "{}",
            format_plan_styled(&listing.root, &review.plan, &review.confirmations, color)
        );
    }
    if dry_run {
        return Ok(());
    }

    let needs_confirmation = listing.config.apply.confirm && !review.confirmations.is_empty();
    if needs_confirmation && !yes {
        if !std::io::stdin().is_terminal() {
            bail!("confirmation required for deletes or overwrites; rerun with --yes");
        }
        eprintln!("{}", format_confirmations(&listing.root, &review.confirmations));
        let approved = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Apply {} operation(s)?",
                review.plan.operations.len()
            ))
            .default(false)
            .interact()?;
        if !approved {
            return Err(CliptreeError::ApplyAborted.into());
        }
    }

    let events: Arc<dyn ApplyEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(NoopEventSink)
    };
    let report = ApplyUseCase::new(&listing.fs)
        .with_options(listing.config.apply_options())
        .with_events(events)
        .apply(&review.plan);

    if !json {
        println!();
        println!("{}", format_report_styled(&listing.root, &report, color));
        println!("{}", report_summary(&report));
    }

    if report.has_errors() {
        bail!("{} operation(s) failed", report.error_count());
    }
    Ok(())
}
