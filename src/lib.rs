//! Post-install cleanup for Composer-managed Drupal projects.
//!
//! After Composer installs or updates a package, the files listed under
//! `extra.drupal-cleanup` in `composer.json` (tests, docs, build leftovers)
//! are deleted from the package's install directory. Rules are grouped by
//! package type and by scope (`default`, `dev`, `no-dev`); a global
//! `exclude` list removes patterns from the effective rule set.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: load and validate the cleanup rules and run settings
//! - **[`package`]**: package metadata and install path resolution
//! - **[`hook`]**: the cleanup hook applying rules through [`fs::Filesystem`]
//! - **[`commands`]**: top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod hook;
pub mod logging;
pub mod package;
pub mod rules;
