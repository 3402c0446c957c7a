//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--verbose` is global and controls the tracing filter
//! - An edited buffer is read from a file, or from stdin when given as `-`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cliptree - edit a directory listing as text, then apply the difference
#[derive(Parser, Debug)]
#[command(name = "cliptree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the editable listing of a directory
    List {
        /// Directory to list
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Include dot-files
        #[arg(long)]
        hidden: bool,
    },

    /// Show the operations an edited listing would perform
    Plan {
        /// Directory the listing was taken from
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Edited listing file, or `-` for stdin
        #[arg(short, long)]
        buffer: PathBuf,

        /// Include dot-files in the original listing
        #[arg(long)]
        hidden: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an edited listing to the directory
    Apply {
        /// Directory the listing was taken from
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Edited listing file, or `-` for stdin
        #[arg(short, long)]
        buffer: PathBuf,

        /// Include dot-files in the original listing
        #[arg(long)]
        hidden: bool,

        /// Skip confirmation of deletes and overwrites
        #[arg(short, long)]
        yes: bool,

        /// Show the plan without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Stream apply events as NDJSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Default tracing directive for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
