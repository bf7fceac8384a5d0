//! # git-around CLI
//!
//! Binary entry point for the `git-around` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging.
//! - Loading the configuration and dispatching to housekeeping or
//!   staleness-report mode.
//!
//! The core application logic lives in the library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
