//! # Error Handling
//!
//! Centralized error type for `git-around`, built on `thiserror`.
//!
//! Only startup preconditions are modeled as errors: a missing or unparsable
//! configuration file, an invalid glob pattern, and I/O failures while
//! resolving the repository set. Everything that can go wrong once repository
//! processing has begun (a vanished path, a command that exits non-zero, a
//! binary that cannot be launched) is deliberately *not* an `Error` variant:
//! those are reported outcome values carried by [`crate::runner::Outcome`] so
//! that one bad repository can never abort the sweep.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for git-around operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file does not exist at the expected location.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_not_found() {
        let error = Error::ConfigNotFound {
            path: PathBuf::from("/home/user/.config/git-around/config.yaml"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Config file not found"));
        assert!(display.contains("git-around/config.yaml"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_str = "invalid: [unclosed";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: Error = yaml_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse YAML"));
    }

    #[test]
    fn test_error_from_glob_error() {
        let glob_error = glob::Pattern::new("[unclosed").unwrap_err();
        let error: Error = glob_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Glob pattern error"));
    }
}
