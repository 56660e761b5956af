//! Core logging types: package entries, status, and the [`Log`] trait.

/// Per-package result for summary reporting.
#[derive(Debug, Clone)]
pub struct PackageEntry {
    /// Vendor-qualified package name.
    pub name: String,
    /// Final status of the package.
    pub status: PackageStatus,
    /// Optional detail message (e.g. removed count or skip reason).
    pub message: Option<String>,
}

/// Status of a processed package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    /// Every matched path was removed.
    Ok,
    /// No rules apply to the package type.
    NotApplicable,
    /// Cleanup was skipped (kill switch, package not installed).
    Skipped,
    /// Matches were reported but nothing was removed.
    DryRun,
    /// At least one path could not be removed.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) writes through `tracing`;
/// [`MemoryLog`](super::memory::MemoryLog) keeps entries in memory so
/// callers embedding the hook can inspect its diagnostics.
///
/// The cleanup hook writes its verbose diagnostics with [`debug`](Self::debug)
/// and its error sink with [`error`](Self::error).
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a verbose message (suppressed on console unless `-v`).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a package result for the summary.
    fn record_package(&self, name: &str, status: PackageStatus, message: Option<&str>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_status_equality() {
        assert_eq!(PackageStatus::Ok, PackageStatus::Ok);
        assert_ne!(PackageStatus::Ok, PackageStatus::Failed);
        assert_ne!(PackageStatus::Skipped, PackageStatus::DryRun);
        assert_ne!(PackageStatus::NotApplicable, PackageStatus::Ok);
    }

    #[test]
    fn package_entry_clone() {
        let entry = PackageEntry {
            name: "drupal/token".to_string(),
            status: PackageStatus::Ok,
            message: Some("removed 3".to_string()),
        };
        let cloned = entry.clone();
        assert_eq!(cloned.name, entry.name);
        assert_eq!(cloned.status, entry.status);
        assert_eq!(cloned.message, entry.message);
    }
}
