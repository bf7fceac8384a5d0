//! CLI argument parsing and mode dispatch

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use git_around::{config, resolve};

use crate::commands;

/// git-around - Batch git housekeeping across local repositories
#[derive(Parser, Debug)]
#[command(name = "git-around")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show commands without executing them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Report repos stale for DAYS (default 30) or with submodules,
    /// instead of running housekeeping
    #[arg(
        short = 's',
        long,
        value_name = "DAYS",
        num_args = 0..=1,
        default_missing_value = "30"
    )]
    stale: Option<u64>,

    /// Path to the configuration file
    /// (default: $XDG_CONFIG_HOME/git-around/config.yaml)
    #[arg(short, long, value_name = "FILE", env = "GIT_AROUND_CONFIG")]
    config: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the selected mode.
    ///
    /// Only configuration loading can fail here; once plans are resolved,
    /// individual command failures are reported without affecting the exit
    /// status.
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .init();

        let config_path = self
            .config
            .unwrap_or_else(config::default_config_path);
        log::info!("Using config file: {}", config_path.display());

        let config = config::Config::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        let plans = resolve::resolve(&config).context("Failed to resolve repository set")?;

        match self.stale {
            Some(days) => commands::stale::execute(&plans, days),
            None => commands::run::execute(&plans, self.dry_run),
        }
    }
}
