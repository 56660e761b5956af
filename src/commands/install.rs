//! Command: clean named packages after `composer install` / `composer update`.
use anyhow::Result;

use super::{CommandSetup, finish, record};
use crate::cli::{GlobalOpts, PackagesOpts};
use crate::fs::{Filesystem, StdFilesystem};
use crate::logging::{Log, Logger, PackageStatus};
use crate::package::InstalledPackages;

/// Composer event the named packages are cleaned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `post-package-install`
    Install,
    /// `post-package-update`
    Update,
}

/// Run the install or update command.
///
/// # Errors
///
/// Returns an error if the manifest or `installed.json` cannot be loaded.
/// Cleanup failures of individual packages are reported in the summary and
/// never fail the command.
pub fn run(global: &GlobalOpts, opts: &PackagesOpts, event: Event, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let installed = setup.installed()?;

    execute(&setup, &installed, &opts.packages, event, &StdFilesystem, log);

    finish(log);
    Ok(())
}

/// Clean each named package as if Composer had just installed or updated it.
///
/// Names missing from `installed.json` are warned about and skipped.
pub fn execute(
    setup: &CommandSetup,
    installed: &InstalledPackages,
    names: &[String],
    event: Event,
    fs: &dyn Filesystem,
    log: &dyn Log,
) {
    let hook = setup.hook(fs, log);
    log.stage(if setup.settings.dry_run {
        "Cleaning packages (dry run)"
    } else {
        "Cleaning packages"
    });

    for name in names {
        let Some(entry) = installed.find(name) else {
            log.warn(&format!("{name} is not installed"));
            log.record_package(name, PackageStatus::Skipped, Some("not installed"));
            continue;
        };

        let outcome = match event {
            Event::Install => hook.on_post_package_install(&entry.package, installed),
            // installed.json only knows the target; it stands in for the initial package.
            Event::Update => {
                hook.on_post_package_update(&entry.package, &entry.package, installed)
            }
        };
        record(log, name, &outcome);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::{CleanupConfig, Settings};
    use crate::fs::MockFilesystem;
    use crate::logging::MemoryLog;
    use serde_json::json;

    fn setup(settings: Settings) -> CommandSetup {
        CommandSetup {
            manifest_path: "/site/composer.json".into(),
            config: CleanupConfig::from_value(
                &json!({ "default": { "drupal-module": ["tests"] } }),
                "",
            )
            .unwrap(),
            settings,
            vendor_dir: "/site/vendor".into(),
        }
    }

    fn installed() -> InstalledPackages {
        let vendor = Path::new("/site/vendor");
        InstalledPackages::parse(
            vendor,
            &vendor.join("composer/installed.json"),
            r#"{ "packages": [
                { "name": "drupal/token", "type": "drupal-module",
                  "install-path": "../../web/modules/contrib/token" },
                { "name": "psr/log", "install-path": "../psr/log" }
            ] }"#,
        )
        .unwrap()
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unknown_package_is_skipped_with_warning() {
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        let log = MemoryLog::new();

        execute(
            &setup(Settings::default()),
            &installed(),
            &names(&["drupal/missing"]),
            Event::Install,
            &fs,
            &log,
        );

        let entries = log.package_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, PackageStatus::Skipped);
        assert_eq!(entries[0].message.as_deref(), Some("not installed"));
    }

    #[test]
    fn named_packages_are_cleaned_at_their_install_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_glob()
            .withf(|base, rule| {
                base == Path::new("/site/web/modules/contrib/token") && rule == "tests"
            })
            .times(1)
            .returning(|base, _| Ok(vec![base.join("tests")]));
        fs.expect_remove().times(1).returning(|_| Ok(()));
        let log = MemoryLog::new();

        execute(
            &setup(Settings::default()),
            &installed(),
            &names(&["drupal/token", "psr/log"]),
            Event::Update,
            &fs,
            &log,
        );

        let entries = log.package_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "drupal/token");
        assert_eq!(entries[0].status, PackageStatus::Ok);
        assert_eq!(entries[0].message.as_deref(), Some("removed 1"));
        assert_eq!(entries[1].name, "psr/log");
        assert_eq!(entries[1].status, PackageStatus::NotApplicable);
    }

    #[test]
    fn skip_flag_records_skipped_packages() {
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let settings = Settings {
            skip: true,
            ..Settings::default()
        };

        execute(
            &setup(settings),
            &installed(),
            &names(&["drupal/token"]),
            Event::Install,
            &fs,
            &log,
        );

        assert_eq!(log.package_entries()[0].status, PackageStatus::Skipped);
    }
}
