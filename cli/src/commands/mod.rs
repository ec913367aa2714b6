//! Subcommand handlers.

pub mod history;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::History(args) => history::run(&args).await,
    }
}
