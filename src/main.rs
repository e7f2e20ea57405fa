//! DevScore - code submission evaluation CLI
//!
//! Runs lexical static analysis over a submitted source file, optionally
//! asks an LLM backend for a qualitative review, and folds both into a
//! single 0-100 DevScore.

use anyhow::Result;
use clap::Parser;
use devscore::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides the --log-level flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    cli::run(cli)
}
