//! Console logger with per-package summary collection.
use std::sync::Mutex;

use super::types::{Log, PackageEntry, PackageStatus};

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "drupal_cleanup::stage";
/// Target used for dry-run actions.
pub(super) const DRY_RUN_TARGET: &str = "drupal_cleanup::dry_run";

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger that emits every message as a [`tracing`] event.
///
/// Console formatting and verbosity are decided by the subscriber installed
/// with [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug, Default)]
pub struct Logger {
    packages: Mutex<Vec<PackageEntry>>,
}

impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone of all recorded package entries.
    #[must_use]
    pub fn package_entries(&self) -> Vec<PackageEntry> {
        self.packages.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a verbose message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a package result for the summary.
    pub fn record_package(&self, name: &str, status: PackageStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.packages.lock() {
            guard.push(PackageEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of packages with failed removals.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.packages.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|p| p.status == PackageStatus::Failed)
                .count()
        })
    }

    /// Print the summary of all recorded packages.
    ///
    /// Packages the configuration does not apply to are counted but not
    /// listed individually.
    pub fn print_summary(&self) {
        let packages = self.package_entries();
        if packages.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for package in &packages {
            let (icon, color) = match package.status {
                PackageStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                PackageStatus::NotApplicable => {
                    not_applicable += 1;
                    continue;
                }
                PackageStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                PackageStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[37m")
                }
                PackageStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = package
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", package.name));
        }

        let total = ok + not_applicable + skipped + dry_run + failed;
        self.info(&format!(
            "{total} packages: \x1b[32m{ok} cleaned\x1b[0m, \x1b[2m{not_applicable} n/a\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[37m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_package(&self, name: &str, status: PackageStatus, message: Option<&str>) {
        self.record_package(name, status, message);
    }
}
