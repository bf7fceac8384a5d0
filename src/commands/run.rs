//! Housekeeping mode: run the configured tasks in every resolved repository.

use anyhow::Result;

use git_around::engine::HousekeepingEngine;
use git_around::plan::RepoPlan;
use git_around::runner::SystemRunner;

/// Execute housekeeping over the resolved plans.
///
/// Individual command failures are logged by the engine and never escalate
/// to the process exit code.
pub fn execute(plans: &[RepoPlan], dry_run: bool) -> Result<()> {
    if dry_run {
        log::info!("Running git-around (dry run)...");
    } else {
        log::info!("Running git-around...");
    }

    let mut runner = SystemRunner::new(dry_run);
    let reports = HousekeepingEngine::new(&mut runner).run(plans);

    let failures: usize = reports
        .iter()
        .flat_map(|r| &r.tasks)
        .filter(|t| t.outcome.is_failure())
        .count();
    if failures > 0 {
        log::warn!(
            "Finished with {} failed command(s) across {} repositories",
            failures,
            reports.len()
        );
    } else {
        log::info!("Finished processing {} repositories", reports.len());
    }
    Ok(())
}
