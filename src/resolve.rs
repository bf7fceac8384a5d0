//! # Repository-Set Resolution
//!
//! Turns the declarative configuration into a concrete, ordered list of
//! [`RepoPlan`]s. Each entry's `path` specifier is expanded independently:
//!
//! - A literal specifier (no glob metacharacters) resolves to itself when it
//!   names an existing directory, and to nothing otherwise.
//! - A glob specifier is split into a base directory and a final-component
//!   pattern. Entries directly under the base are kept when their name
//!   matches the pattern *and* they contain a `.git` directory; everything
//!   else is silently dropped. A base that does not exist falls back to the
//!   user's home directory, tolerating slightly malformed entries instead of
//!   erroring.
//!
//! Glob matches are listed in sorted name order so resolution is
//! deterministic. An entry that expands to nothing contributes no plans and
//! is not an error. Overlapping patterns that resolve to the same directory
//! produce independent plans; duplicates are intentionally not collapsed.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::config::Config;
use crate::error::Result;
use crate::plan::RepoPlan;

/// Expand a leading `~` or `~/` to the user's home directory.
pub fn expand_user(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn has_glob_meta(raw: &str) -> bool {
    raw.contains(['*', '?', '['])
}

/// Resolve a symlink-free absolute form, keeping the original path when the
/// filesystem refuses (e.g. the entry vanished mid-listing).
fn resolved(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path).unwrap_or(path)
}

/// Expand a single path specifier into zero or more concrete repository
/// directories. See the module docs for the matching rules.
pub fn expand_specifier(raw: &str) -> Result<Vec<PathBuf>> {
    let expanded = expand_user(raw);

    if !has_glob_meta(raw) {
        if expanded.is_dir() {
            return Ok(vec![resolved(expanded)]);
        }
        return Ok(Vec::new());
    }

    let base = match expanded.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let base = if base.exists() {
        base
    } else {
        // Malformed base: search the home directory rather than failing.
        dirs::home_dir().unwrap_or(base)
    };

    let pattern = match expanded.file_name() {
        Some(name) => Pattern::new(&name.to_string_lossy())?,
        None => return Ok(Vec::new()),
    };

    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&base)? {
        entries.push(entry?.path());
    }
    entries.sort();

    let mut matched = Vec::new();
    for candidate in entries {
        let name = match candidate.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if pattern.matches(&name) && is_repository(&candidate) {
            matched.push(resolved(candidate));
        }
    }
    Ok(matched)
}

/// A directory counts as a repository when it carries a `.git` directory.
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Build the ordered plan list: one plan per (entry, resolved path) pair,
/// in entry order then resolved-path order.
pub fn resolve(config: &Config) -> Result<Vec<RepoPlan>> {
    let mut plans = Vec::new();
    for entry in &config.repos {
        for path in expand_specifier(&entry.path)? {
            log::debug!("Adding repo path: {}", path.display());
            plans.push(RepoPlan::from_entry(entry, path));
        }
    }
    Ok(plans)
}
