//! Domain-specific error types for the cleanup engine.
//!
//! Internal modules return typed errors while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! CleanupError
//! ├── Config(ConfigError)    composer.json / rules file loading and shape
//! └── Package(PackageError)  installed.json lookup
//!
//! ExpansionError             one rule failed to expand (non-fatal)
//! RemoveError                one path failed to delete (non-fatal)
//! ```
//!
//! Only [`CleanupError`] and its children ever reach a caller. Expansion and
//! removal errors are recorded in a
//! [`CleanupReport`](crate::hook::CleanupReport) and logged; they never abort
//! a cleanup pass.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for startup failures.
#[derive(Error, Debug)]
pub enum CleanupError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Installed package metadata could not be loaded.
    #[error("Package error: {0}")]
    Package(#[from] PackageError),
}

/// Errors that arise while loading the cleanup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The manifest or rules file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid JSON or TOML.
    #[error("Invalid syntax in {path}: {message}")]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A value under `drupal-cleanup` has the wrong type.
    #[error("Invalid value at {pointer}: expected {expected}")]
    InvalidShape {
        /// JSON-pointer-like location of the offending value.
        pointer: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },
}

/// Errors that arise while resolving installed packages.
#[derive(Error, Debug)]
pub enum PackageError {
    /// `installed.json` could not be read.
    #[error("IO error reading {path}: {source}")]
    InstalledIo {
        /// Path of `installed.json`.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// `installed.json` is not in a recognised format.
    #[error("Invalid installed packages file {path}: {message}")]
    InstalledParse {
        /// Path of `installed.json`.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The named package is not installed.
    #[error("Package '{0}' is not installed")]
    NotInstalled(String),
}

/// Why a single rule produced no paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    /// The rule is not a valid glob pattern.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending rule.
        pattern: String,
        /// Parser message.
        message: String,
    },

    /// A directory could not be read while expanding the rule.
    #[error("read error while expanding '{pattern}': {message}")]
    Read {
        /// The rule being expanded.
        pattern: String,
        /// Underlying error message.
        message: String,
    },

    /// The rule would reach outside the package install path.
    #[error("pattern '{0}' escapes the install path")]
    EscapesInstallPath(String),
}

/// Why a single resolved path could not be removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoveError {
    /// Permission was denied.
    #[error("permission denied removing {}", path.display())]
    PermissionDenied {
        /// Path that could not be removed.
        path: PathBuf,
    },

    /// The path no longer exists (e.g. removed with a parent directory).
    #[error("{} no longer exists", path.display())]
    Vanished {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("could not remove {}: {message}", path.display())]
    Io {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl RemoveError {
    /// Classify an [`io::Error`] raised while removing `path`.
    #[must_use]
    pub fn from_io(path: PathBuf, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotFound => Self::Vanished { path },
            _ => Self::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// The path the failure refers to.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        match self {
            Self::PermissionDenied { path } | Self::Vanished { path } | Self::Io { path, .. } => {
                path
            }
        }
    }
}
