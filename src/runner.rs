//! # Command Execution
//!
//! This module is the single seam between `git-around` and the outside
//! world: it runs one command in one working directory and reports what
//! happened.
//!
//! ## Key Components
//!
//! - **`CommandSpec`**: the two task forms. `Argv` is an argument vector
//!   executed without shell interpretation (the built-in git tasks);
//!   `Shell` is a single string handed to `sh -c`, so per-repo custom
//!   commands can use pipes and redirection.
//!
//! - **`Outcome`**: what a run produced. A non-zero exit code is an
//!   `Outcome::CommandFailed`, not an `Err` — command failure is an
//!   ordinary, reportable result that must never abort the sweep. A
//!   process that could not even be started is `Outcome::LaunchFailed`,
//!   kept distinct so diagnostics can tell "git said no" apart from
//!   "there is no git".
//!
//! - **`CommandRunner`**: the trait callers drive. The engine and the
//!   staleness reporter only ever see this interface, which keeps them
//!   testable with a scripted fake.
//!
//! - **`SystemRunner`**: the real implementation on top of
//!   `std::process::Command`. With `dry_run` set it executes nothing and
//!   produces a description of what would have run; callers proceed
//!   through the identical control flow either way.

use std::fmt;
use std::path::Path;
use std::process::Command;

/// One task in executable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Argument vector, executed directly without a shell.
    Argv(Vec<String>),
    /// Shell command string, executed through `sh -c`.
    Shell(String),
}

impl CommandSpec {
    /// Build the structured form from string slices.
    pub fn argv(parts: &[&str]) -> Self {
        CommandSpec::Argv(parts.iter().map(|s| s.to_string()).collect())
    }

    /// Build the shell form.
    pub fn shell(command: impl Into<String>) -> Self {
        CommandSpec::Shell(command.into())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Argv(args) => write!(f, "{}", args.join(" ")),
            CommandSpec::Shell(command) => write!(f, "{}", command),
        }
    }
}

/// The result of driving one [`CommandSpec`] through a runner.
///
/// Failures are values, not errors: callers inspect the outcome, report
/// it, and move on to the next task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and exited zero. Stdout is kept for diagnostics.
    Ran { stdout: String },
    /// Dry-run substitute: nothing executed, only described.
    DryRun { description: String },
    /// The command ran and exited non-zero.
    CommandFailed { code: Option<i32>, stderr: String },
    /// The command could not be started at all.
    LaunchFailed { message: String },
}

impl Outcome {
    /// True for the two failure variants.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::CommandFailed { .. } | Outcome::LaunchFailed { .. }
        )
    }
}

/// Executes one task in one working directory.
///
/// Implementations must never return control-flow-altering errors for
/// ordinary command failure; every result is an [`Outcome`].
pub trait CommandRunner {
    fn run(&mut self, spec: &CommandSpec, cwd: &Path) -> Outcome;
}

/// The real runner: synchronous subprocess execution with captured
/// stdout/stderr. There is no timeout; a hanging command hangs the run.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    /// When set, describe instead of execute.
    pub dry_run: bool,
}

impl SystemRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec, cwd: &Path) -> Outcome {
        if self.dry_run {
            return Outcome::DryRun {
                description: format!("{} in {}", spec, cwd.display()),
            };
        }

        log::info!("Executing command: {} in {}", spec, cwd.display());
        let mut command = match spec {
            CommandSpec::Argv(args) => {
                let Some((program, rest)) = args.split_first() else {
                    return Outcome::LaunchFailed {
                        message: "empty argument vector".to_string(),
                    };
                };
                let mut command = Command::new(program);
                command.args(rest);
                command
            }
            CommandSpec::Shell(line) => {
                let mut command = Command::new("sh");
                command.arg("-c").arg(line);
                command
            }
        };

        let output = match command.current_dir(cwd).output() {
            Ok(output) => output,
            Err(e) => {
                return Outcome::LaunchFailed {
                    message: e.to_string(),
                }
            }
        };

        if output.status.success() {
            Outcome::Ran {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        } else {
            Outcome::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_argv_success_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(false);
        let outcome = runner.run(&CommandSpec::argv(&["echo", "hello"]), temp.path());
        match outcome {
            Outcome::Ran { stdout } => assert_eq!(stdout.trim(), "hello"),
            other => panic!("expected Ran, got {:?}", other),
        }
    }

    #[test]
    fn test_shell_form_supports_pipes() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(false);
        let outcome = runner.run(&CommandSpec::shell("echo one two | wc -w"), temp.path());
        match outcome {
            Outcome::Ran { stdout } => assert_eq!(stdout.trim(), "2"),
            other => panic!("expected Ran, got {:?}", other),
        }
    }

    #[test]
    fn test_nonzero_exit_is_command_failed() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(false);
        let outcome = runner.run(&CommandSpec::shell("echo oops >&2; exit 3"), temp.path());
        match &outcome {
            Outcome::CommandFailed { code, stderr } => {
                assert_eq!(*code, Some(3));
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_missing_executable_is_launch_failed() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(false);
        let outcome = runner.run(
            &CommandSpec::argv(&["git-around-no-such-binary"]),
            temp.path(),
        );
        assert!(matches!(outcome, Outcome::LaunchFailed { .. }));
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_runs_in_working_directory() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(false);
        let outcome = runner.run(&CommandSpec::shell("touch marker"), temp.path());
        assert!(matches!(outcome, Outcome::Ran { .. }));
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn test_dry_run_executes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(true);
        let outcome = runner.run(&CommandSpec::shell("touch should-not-exist"), temp.path());
        match outcome {
            Outcome::DryRun { description } => {
                assert!(description.contains("touch should-not-exist"));
                assert!(description.contains(&temp.path().display().to_string()));
            }
            other => panic!("expected DryRun, got {:?}", other),
        }
        assert!(!temp.path().join("should-not-exist").exists());
    }

    #[test]
    fn test_spec_display() {
        assert_eq!(CommandSpec::argv(&["git", "pull"]).to_string(), "git pull");
        assert_eq!(
            CommandSpec::shell("git fetch | head").to_string(),
            "git fetch | head"
        );
    }
}
