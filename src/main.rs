//! cliptree CLI
//!
//! Usage: cliptree <COMMAND>
//!
//! Commands:
//!   list   Print the editable listing of a directory
//!   plan   Show the operations an edited listing would perform
//!   apply  Apply an edited listing to the directory

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cliptree::presentation::{Cli, Commands};

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("CLIPTREE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("cliptree={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match cli.command {
        Commands::List { root, hidden } => commands::cmd_list(&root, hidden),
        Commands::Plan {
            root,
            buffer,
            hidden,
            json,
        } => commands::cmd_plan(&root, &buffer, hidden, json),
        Commands::Apply {
            root,
            buffer,
            hidden,
            yes,
            dry_run,
            json,
        } => commands::cmd_apply(&root, &buffer, hidden, yes, dry_run, json),
    }
}
