//! # git-around Library
//!
//! Core functionality for the `git-around` command-line tool: batch git
//! housekeeping across a set of locally checked-out repositories described
//! in a YAML configuration file.
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the schema for
//!   `~/.config/git-around/config.yaml` — a list of repository entries with
//!   task flags and custom commands.
//! - **Resolution (`resolve`, `plan`)**: expands each entry's path (literal
//!   or glob pattern) into concrete repository directories, producing an
//!   ordered list of [`plan::RepoPlan`]s.
//! - **Execution (`runner`, `engine`)**: the [`runner::CommandRunner`] seam
//!   runs one command in one working directory (honoring dry-run), and the
//!   [`engine::HousekeepingEngine`] drives every plan through it with
//!   per-command failure isolation.
//! - **Staleness (`stale`)**: the alternate mode, reporting repositories
//!   whose last commit predates a threshold over the same resolved set.
//!
//! ## Execution Flow
//!
//! 1. Load and validate the configuration (the only fatal step).
//! 2. Resolve entries into plans, in entry order then path order.
//! 3. Either run housekeeping tasks per plan, or scan for staleness —
//!    never both in one invocation.
//!
//! Repositories are processed strictly sequentially; a failing command is a
//! reported outcome, not an abort.

pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod resolve;
pub mod runner;
pub mod stale;
