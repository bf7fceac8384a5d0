//! # CLI Mode Implementations
//!
//! `git-around` has no subcommands; it runs in one of two mutually
//! exclusive modes selected by the `--stale` flag. Each mode lives in its
//! own file with an `execute` function that receives the resolved plan
//! list from [`crate::cli`] and orchestrates the library.

pub mod run;
pub mod stale;
