//! Command: clean one package from explicit metadata.
use anyhow::Result;

use super::{CommandSetup, finish, record};
use crate::cli::{CleanOpts, GlobalOpts};
use crate::fs::{Filesystem, StdFilesystem};
use crate::hook::CleanOutcome;
use crate::logging::{Log, Logger};
use crate::package::{FixedInstallPath, Package};

/// Run the clean command.
///
/// # Errors
///
/// Returns an error if the manifest or rules file cannot be loaded.
pub fn run(global: &GlobalOpts, opts: &CleanOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    execute(&setup, opts, &StdFilesystem, log);
    finish(log);
    Ok(())
}

/// Clean one package whose name, type and install path are given directly.
///
/// A relative `--path` resolves against the current directory.
pub fn execute(
    setup: &CommandSetup,
    opts: &CleanOpts,
    fs: &dyn Filesystem,
    log: &dyn Log,
) -> CleanOutcome {
    let package = Package::new(opts.name.as_str(), opts.package_type.as_str());
    let resolver = FixedInstallPath::new(opts.name.as_str(), opts.path.as_path());
    log.stage(&format!("Cleaning {}", package.name));

    let outcome = setup
        .hook(fs, log)
        .on_post_package_install(&package, &resolver);
    record(log, &package.name, &outcome);
    outcome
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::config::{CleanupConfig, Settings};
    use crate::hook::SkipReason;
    use crate::logging::{MemoryLog, PackageStatus};
    use serde_json::json;

    fn setup(settings: Settings) -> CommandSetup {
        CommandSetup {
            manifest_path: "composer.json".into(),
            config: CleanupConfig::from_value(
                &json!({ "no-dev": { "drupal-theme": ["node_modules", "*.md"] } }),
                "",
            )
            .unwrap(),
            settings,
            vendor_dir: "vendor".into(),
        }
    }

    fn opts(path: &std::path::Path, package_type: &str) -> CleanOpts {
        CleanOpts {
            name: "drupal/olivero_plus".to_string(),
            package_type: package_type.to_string(),
            path: path.to_path_buf(),
        }
    }

    #[test]
    fn cleans_explicit_path_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let theme = dir.path().join("olivero_plus");
        std::fs::create_dir_all(theme.join("node_modules/pkg")).unwrap();
        std::fs::write(theme.join("README.md"), "x").unwrap();
        std::fs::write(theme.join("olivero_plus.info.yml"), "x").unwrap();
        let log = MemoryLog::new();

        let outcome = execute(
            &setup(Settings::default()),
            &opts(&theme, "drupal-theme"),
            &StdFilesystem,
            &log,
        );

        let CleanOutcome::Cleaned(report) = outcome else {
            panic!("expected cleanup");
        };
        assert_eq!(report.removed_count(), 2);
        assert!(!theme.join("node_modules").exists());
        assert!(!theme.join("README.md").exists());
        assert!(theme.join("olivero_plus.info.yml").exists());
        assert_eq!(log.package_entries()[0].status, PackageStatus::Ok);
    }

    #[test]
    fn dry_run_leaves_files_in_place() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "x").unwrap();
        let log = MemoryLog::new();
        let settings = Settings {
            dry_run: true,
            ..Settings::default()
        };

        execute(
            &setup(settings),
            &opts(dir.path(), "drupal-theme"),
            &StdFilesystem,
            &log,
        );

        assert!(dir.path().join("README.md").exists());
        let entry = &log.package_entries()[0];
        assert_eq!(entry.status, PackageStatus::DryRun);
        assert_eq!(entry.message.as_deref(), Some("would remove 1"));
    }

    #[test]
    fn unconfigured_type_is_not_applicable() {
        let dir = tempfile::tempdir().unwrap();
        let log = MemoryLog::new();

        let outcome = execute(
            &setup(Settings::default()),
            &opts(dir.path(), "drupal-module"),
            &StdFilesystem,
            &log,
        );

        assert_eq!(outcome, CleanOutcome::Skipped(SkipReason::NoSettings));
        assert_eq!(
            log.package_entries()[0].status,
            PackageStatus::NotApplicable
        );
    }
}
