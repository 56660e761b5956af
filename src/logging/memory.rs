//! In-memory logger for embedding the hook and inspecting its diagnostics.
use std::sync::Mutex;

use super::types::{Log, PackageEntry, PackageStatus};

/// A single captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A stage header entry.
    Stage(String),
    /// An informational entry.
    Info(String),
    /// A verbose entry.
    Debug(String),
    /// A warning entry.
    Warn(String),
    /// An error entry.
    Error(String),
    /// A dry-run entry.
    DryRun(String),
}

impl LogEntry {
    /// The message text regardless of level.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Stage(msg)
            | Self::Info(msg)
            | Self::Debug(msg)
            | Self::Warn(msg)
            | Self::Error(msg)
            | Self::DryRun(msg) => msg,
        }
    }
}

/// Implement the display methods of [`Log`] by pushing each message into
/// `self.entries` as the corresponding [`LogEntry`] variant.
macro_rules! capture_log_methods {
    ($($method:ident => $variant:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                if let Ok(mut guard) = self.entries.lock() {
                    guard.push(LogEntry::$variant(msg.to_string()));
                }
            }
        )+
    };
}

/// Logger that keeps every entry in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
    packages: Mutex<Vec<PackageEntry>>,
}

impl MemoryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured entries.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Messages written to the error sink.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                LogEntry::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Messages written at verbose level.
    #[must_use]
    pub fn debugs(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                LogEntry::Debug(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Recorded package results.
    #[must_use]
    pub fn package_entries(&self) -> Vec<PackageEntry> {
        self.packages.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

impl Log for MemoryLog {
    capture_log_methods! {
        stage   => Stage,
        info    => Info,
        debug   => Debug,
        warn    => Warn,
        error   => Error,
        dry_run => DryRun,
    }

    fn record_package(&self, name: &str, status: PackageStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.packages.lock() {
            guard.push(PackageEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }
}
