//! # Staleness Reporting
//!
//! The alternate run mode: instead of housekeeping, walk the same resolved
//! plan list and flag repositories whose last commit is older than a
//! threshold.
//!
//! The last-commit timestamp comes from `git log -1 --format=%ct`, issued
//! through the same [`CommandRunner`] seam as every other command (always a
//! live, read-only query; staleness reporting has no dry-run behavior to
//! suppress). A repository counts as stale when its age in days reaches the
//! threshold, or when it tracks submodules (`update_submodules` enabled and
//! a `.gitmodules` file present) regardless of age — submodule-tracking
//! repos are checked more eagerly on purpose.
//!
//! A failed or unparsable query means "could not determine last commit":
//! the repository is reported as such and dropped from further analysis,
//! never aborting the scan.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::plan::RepoPlan;
use crate::runner::{CommandRunner, CommandSpec, Outcome};

const SECONDS_PER_DAY: i64 = 86_400;

/// One repository flagged by the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct StaleRepo {
    pub path: PathBuf,
    /// Age of the last commit, in days.
    pub age_days: f64,
}

/// Scans resolved plans for repositories past the staleness threshold.
pub struct StalenessReporter<'a, R: CommandRunner> {
    runner: &'a mut R,
    threshold_days: u64,
}

impl<'a, R: CommandRunner> StalenessReporter<'a, R> {
    pub fn new(runner: &'a mut R, threshold_days: u64) -> Self {
        Self {
            runner,
            threshold_days,
        }
    }

    /// Scan every plan and return the stale repositories, in plan order.
    ///
    /// `now` is passed in rather than read from the clock so boundary
    /// behavior is testable.
    pub fn report(&mut self, plans: &[RepoPlan], now: SystemTime) -> Vec<StaleRepo> {
        log::info!(
            "Scanning for repositories stale for >= {} days...",
            self.threshold_days
        );
        let now_secs = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        let cutoff = now_secs - self.threshold_days as i64 * SECONDS_PER_DAY;

        let mut stale = Vec::new();
        for plan in plans {
            if !plan.path.is_dir() {
                continue;
            }
            let last = match self.last_commit_secs(plan) {
                Some(last) => last,
                None => {
                    log::warn!(
                        "Could not determine last commit for {}",
                        plan.path.display()
                    );
                    continue;
                }
            };
            let age_days = (now_secs - last) as f64 / SECONDS_PER_DAY as f64;
            let tracks_submodules =
                plan.update_submodules && plan.path.join(".gitmodules").exists();
            if last <= cutoff || tracks_submodules {
                log::info!(
                    "STALE: {} (last commit: {:.1} days ago)",
                    plan.path.display(),
                    age_days
                );
                stale.push(StaleRepo {
                    path: plan.path.clone(),
                    age_days,
                });
            }
        }
        stale
    }

    fn last_commit_secs(&mut self, plan: &RepoPlan) -> Option<i64> {
        let query = CommandSpec::argv(&["git", "log", "-1", "--format=%ct"]);
        match self.runner.run(&query, &plan.path) {
            Outcome::Ran { stdout } => stdout.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}
