//! Staleness-report mode: flag repositories past the commit-age threshold.

use std::time::SystemTime;

use anyhow::Result;

use git_around::plan::RepoPlan;
use git_around::runner::SystemRunner;
use git_around::stale::StalenessReporter;

/// Scan the resolved plans and report stale repositories.
///
/// The last-commit query is read-only, so it always runs live; dry-run has
/// no effect in this mode.
pub fn execute(plans: &[RepoPlan], threshold_days: u64) -> Result<()> {
    let mut runner = SystemRunner::new(false);
    let stale =
        StalenessReporter::new(&mut runner, threshold_days).report(plans, SystemTime::now());
    log::debug!("{} stale repositories found", stale.len());
    Ok(())
}
