//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `config.yaml` file consumed by `git-around`, as well as the logic for
//! locating and parsing it.
//!
//! The file is a mapping with a single top-level `repos` list. Each entry
//! names a repository path (literal or glob pattern, tilde-expansion
//! supported) together with the housekeeping tasks to run there:
//!
//! ```yaml
//! repos:
//!   - path: ~/src/dotfiles
//!     auto_push: true
//!   - path: ~/src/work-*
//!     clean: true
//!     commands:
//!       - git fetch --prune
//! ```
//!
//! Defaults are part of the schema, validated once at load time: `auto_pull`
//! is on unless disabled, every other flag is off, `commands` is empty.
//! A missing or unparsable file is a fatal startup error; everything past
//! loading is handled per repository.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One `repos` list item, before glob expansion.
///
/// The `path` field may denote several concrete repositories; the boolean
/// flags and `commands` are propagated to every repository it expands into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Literal directory path or glob pattern. `~` expands to the home
    /// directory.
    pub path: String,

    /// Run `git pull`.
    #[serde(default = "default_true")]
    pub auto_pull: bool,

    /// Run `git push` after all other tasks.
    #[serde(default)]
    pub auto_push: bool,

    /// Run `git clean -fd`.
    #[serde(default)]
    pub clean: bool,

    /// Run `git submodule update --init --recursive`.
    #[serde(default)]
    pub update_submodules: bool,

    /// Arbitrary shell commands run in the repository, in order, after the
    /// built-in git tasks and before the final push.
    #[serde(default)]
    pub commands: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// The whole parsed configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Repository entries, in file order.
    #[serde(default)]
    pub repos: Vec<ConfigEntry>,
}

impl Config {
    /// Load and parse the configuration file at `path`.
    ///
    /// A missing file or invalid YAML is a fatal precondition failure; no
    /// repository processing happens before this succeeds.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a YAML string into a [`Config`].
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

/// Returns the default configuration file location:
/// `$XDG_CONFIG_HOME/git-around/config.yaml`, falling back to
/// `~/.config/git-around/config.yaml` when `XDG_CONFIG_HOME` is unset.
pub fn default_config_path() -> PathBuf {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
    config_home.join("git-around").join("config.yaml")
}
