//! # Repository Plans
//!
//! A [`RepoPlan`] is the validated, filesystem-resolved description of one
//! repository: a concrete directory plus the tasks enabled for it. Plans are
//! produced by [`crate::resolve`], held in memory for the duration of one
//! run, and discarded on exit.
//!
//! The task schedule is fixed: pull, clean, submodule update, the custom
//! commands in configuration order, and push strictly last. Pushing before
//! the other tasks have run would publish a state the sweep is still
//! mutating, so `auto_push` never reorders ahead of anything else.

use std::path::PathBuf;

use crate::config::ConfigEntry;
use crate::runner::CommandSpec;

/// One resolved repository and its enabled housekeeping tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPlan {
    /// Absolute, symlink-resolved repository directory.
    pub path: PathBuf,
    /// Run `git pull`.
    pub auto_pull: bool,
    /// Run `git push` after everything else.
    pub auto_push: bool,
    /// Run `git clean -fd`.
    pub clean: bool,
    /// Run `git submodule update --init --recursive`.
    pub update_submodules: bool,
    /// Custom shell commands, in order.
    pub commands: Vec<String>,
}

impl RepoPlan {
    /// Build a plan for one concrete path, propagating the entry's flags.
    ///
    /// An entry that expands to several paths yields several plans sharing
    /// the same flags and commands.
    pub fn from_entry(entry: &ConfigEntry, path: PathBuf) -> Self {
        Self {
            path,
            auto_pull: entry.auto_pull,
            auto_push: entry.auto_push,
            clean: entry.clean,
            update_submodules: entry.update_submodules,
            commands: entry.commands.clone(),
        }
    }

    /// The enabled tasks in their fixed execution order: pull, clean,
    /// submodule update, each custom command, push last.
    pub fn tasks(&self) -> Vec<CommandSpec> {
        let mut tasks = Vec::new();
        if self.auto_pull {
            tasks.push(CommandSpec::argv(&["git", "pull"]));
        }
        if self.clean {
            tasks.push(CommandSpec::argv(&["git", "clean", "-fd"]));
        }
        if self.update_submodules {
            tasks.push(CommandSpec::argv(&[
                "git",
                "submodule",
                "update",
                "--init",
                "--recursive",
            ]));
        }
        for command in &self.commands {
            tasks.push(CommandSpec::shell(command.clone()));
        }
        if self.auto_push {
            tasks.push(CommandSpec::argv(&["git", "push"]));
        }
        tasks
    }
}
