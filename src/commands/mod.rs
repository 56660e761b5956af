//! Top-level subcommand orchestration.
pub mod all;
pub mod clean;
pub mod install;
pub mod rules;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::manifest::{self, DEFAULT_MANIFEST, Manifest};
use crate::config::settings::{MANIFEST_ENV, VENDOR_DIR_ENV};
use crate::config::{CleanupConfig, Settings, rules_file};
use crate::error::CleanupError;
use crate::fs::Filesystem;
use crate::hook::{CleanOutcome, CleanupHook};
use crate::logging::{Log, Logger};
use crate::package::InstalledPackages;

/// Shared state produced by the common command setup sequence.
///
/// Locates and loads the manifest (or a standalone rules file), builds the
/// run [`Settings`] and resolves the vendor directory, so that each command
/// does not have to repeat the boilerplate.
#[derive(Debug, Clone)]
pub struct CommandSetup {
    /// Manifest the configuration was read from.
    pub manifest_path: PathBuf,
    /// Rules in effect for this run.
    pub config: CleanupConfig,
    /// Skip, dev-mode and dry-run flags for this run.
    pub settings: Settings,
    /// Directory holding `composer/installed.json`.
    pub vendor_dir: PathBuf,
}

impl CommandSetup {
    /// Load configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest or rules file cannot be read or has
    /// an invalid `drupal-cleanup` section.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self> {
        Self::init_with(global, |key| std::env::var(key).ok(), log)
    }

    /// Load configuration, reading environment variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`init`](Self::init).
    pub fn init_with(
        global: &GlobalOpts,
        lookup: impl Fn(&str) -> Option<String>,
        log: &dyn Log,
    ) -> Result<Self> {
        let manifest_path = resolve_manifest_path(global, &lookup);

        log.stage("Loading configuration");
        // A standalone rules file makes composer.json optional.
        let manifest = if global.rules.is_some() && !manifest_path.exists() {
            log.debug(&format!(
                "{} not found, using defaults",
                manifest_path.display()
            ));
            Manifest::empty(&manifest_path)
        } else {
            manifest::load(&manifest_path)
                .map_err(CleanupError::from)
                .with_context(|| format!("loading {}", manifest_path.display()))?
        };

        let config = match &global.rules {
            Some(path) => {
                log.debug(&format!("rules: {}", path.display()));
                rules_file::load(path)
                    .map_err(CleanupError::from)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => manifest.cleanup.clone(),
        };

        let settings = Settings::from_lookup(&lookup)
            .with_dev_mode(global.dev_mode_override())
            .with_dry_run(global.dry_run);
        let vendor_dir = manifest.vendor_dir(lookup(VENDOR_DIR_ENV).as_deref());

        log.debug(&format!("manifest: {}", manifest_path.display()));
        log.debug(&format!("vendor dir: {}", vendor_dir.display()));
        log.debug(&format!(
            "dev mode: {}, skip: {}, dry run: {}",
            settings.dev_mode, settings.skip, settings.dry_run
        ));
        if config.is_empty() {
            log.info("no drupal-cleanup rules configured");
        }

        Ok(Self {
            manifest_path,
            config,
            settings,
            vendor_dir,
        })
    }

    /// Load `installed.json` from the resolved vendor directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn installed(&self) -> Result<InstalledPackages> {
        InstalledPackages::load(&self.vendor_dir)
            .map_err(CleanupError::from)
            .with_context(|| format!("reading installed packages from {}", self.vendor_dir.display()))
    }

    /// Build a hook over this setup.
    #[must_use]
    pub fn hook<'a>(&'a self, fs: &'a dyn Filesystem, log: &'a dyn Log) -> CleanupHook<'a> {
        CleanupHook::new(&self.config, self.settings, fs, log)
    }
}

/// Manifest path from `--manifest`, then `$COMPOSER`, then `composer.json`.
fn resolve_manifest_path(global: &GlobalOpts, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    global.manifest.clone().unwrap_or_else(|| {
        lookup(MANIFEST_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_MANIFEST), PathBuf::from)
    })
}

/// Record the outcome for `name` in the run summary.
pub(crate) fn record(log: &dyn Log, name: &str, outcome: &CleanOutcome) {
    let (status, message) = outcome.summary();
    log.record_package(name, status, message.as_deref());
}

/// Print the run summary; removal failures never fail the command.
pub(crate) fn finish(log: &Logger) {
    log.print_summary();
    let failed = log.failure_count();
    if failed > 0 {
        log.warn(&format!("{failed} package(s) could not be fully cleaned"));
    }
}
