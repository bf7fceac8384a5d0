//! # Housekeeping Engine
//!
//! Drives the resolved plan list through a [`CommandRunner`], one repository
//! at a time, one task at a time, in the fixed order of
//! [`RepoPlan::tasks`].
//!
//! Failure isolation is the engine's one hard rule: a task that fails never
//! prevents the remaining tasks of the same repository, and a repository
//! that misbehaves never prevents the repositories after it. A plan whose
//! path is no longer a directory (removed since resolution) is skipped with
//! a warning. The engine as a whole has no failure mode; everything it
//! observes is collected into reports and logged.

use std::path::PathBuf;

use crate::plan::RepoPlan;
use crate::runner::{CommandRunner, CommandSpec, Outcome};

/// One executed (or described) task and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub spec: CommandSpec,
    pub outcome: Outcome,
}

/// Everything that happened for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReport {
    pub path: PathBuf,
    /// The path was not a directory at processing time; no tasks ran.
    pub skipped: bool,
    pub tasks: Vec<TaskReport>,
}

/// Sequentially processes repository plans, isolating failures per task.
pub struct HousekeepingEngine<'a, R: CommandRunner> {
    runner: &'a mut R,
}

impl<'a, R: CommandRunner> HousekeepingEngine<'a, R> {
    pub fn new(runner: &'a mut R) -> Self {
        Self { runner }
    }

    /// Process every plan in order and return the per-repository reports.
    pub fn run(&mut self, plans: &[RepoPlan]) -> Vec<RepoReport> {
        let mut reports = Vec::with_capacity(plans.len());
        for plan in plans {
            log::info!("Processing repository at: {}", plan.path.display());
            if !plan.path.is_dir() {
                log::warn!(
                    "Path does not exist or is not a directory: {}",
                    plan.path.display()
                );
                reports.push(RepoReport {
                    path: plan.path.clone(),
                    skipped: true,
                    tasks: Vec::new(),
                });
                continue;
            }
            reports.push(self.process_repo(plan));
        }
        reports
    }

    fn process_repo(&mut self, plan: &RepoPlan) -> RepoReport {
        let mut tasks = Vec::new();
        for spec in plan.tasks() {
            let outcome = self.runner.run(&spec, &plan.path);
            match &outcome {
                Outcome::DryRun { description } => {
                    log::info!("[DRY RUN] Would execute: {}", description);
                }
                Outcome::Ran { stdout } => {
                    let stdout = stdout.trim_end();
                    if !stdout.is_empty() {
                        log::debug!("{}", stdout);
                    }
                }
                Outcome::CommandFailed { code, stderr } => {
                    log::error!(
                        "Command failed (exit {}): {}",
                        code.map_or_else(|| "?".to_string(), |c| c.to_string()),
                        spec
                    );
                    let stderr = stderr.trim_end();
                    if !stderr.is_empty() {
                        log::error!("{}", stderr);
                    }
                }
                Outcome::LaunchFailed { message } => {
                    log::error!("Could not start command: {} ({})", spec, message);
                }
            }
            tasks.push(TaskReport { spec, outcome });
        }
        RepoReport {
            path: plan.path.clone(),
            skipped: false,
            tasks,
        }
    }
}
