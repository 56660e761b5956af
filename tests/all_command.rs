#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `all` command: scopes, dry run and the
//! per-package summary across everything in installed.json.

mod common;

use common::{TestProject, TestProjectBuilder};
use drupal_cleanup::cli::GlobalOpts;
use drupal_cleanup::commands::all::execute;
use drupal_cleanup::fs::StdFilesystem;
use drupal_cleanup::logging::{MemoryLog, PackageStatus};
use serde_json::json;

fn project() -> TestProject {
    TestProjectBuilder::new()
        .cleanup(json!({
            "default": { "drupal-module": ["tests"] },
            "dev": { "drupal-theme": [] },
            "no-dev": {
                "drupal-module": ["*.md"],
                "drupal-theme": ["node_modules"]
            }
        }))
        .package(
            "drupal/token",
            "drupal-module",
            "web/modules/contrib/token",
            &["tests/", "README.md", "token.module"],
        )
        .package(
            "drupal/gin",
            "drupal-theme",
            "web/themes/contrib/gin",
            &["node_modules/", "gin.info.yml"],
        )
        .package("symfony/yaml", "library", "vendor/symfony/yaml", &["Tests/"])
        .build()
}

fn statuses(log: &MemoryLog) -> Vec<(String, PackageStatus)> {
    log.package_entries()
        .into_iter()
        .map(|e| (e.name, e.status))
        .collect()
}

#[test]
fn no_dev_applies_default_and_no_dev_rules() {
    let project = project();
    let setup = project.setup();
    let installed = setup.installed().unwrap();
    let log = MemoryLog::new();

    execute(&setup, &installed, &StdFilesystem, &log);

    assert!(!project.exists("web/modules/contrib/token/tests"));
    assert!(!project.exists("web/modules/contrib/token/README.md"));
    assert!(!project.exists("web/themes/contrib/gin/node_modules"));
    assert!(project.exists("web/themes/contrib/gin/gin.info.yml"));
    assert!(project.exists("vendor/symfony/yaml/Tests"));
    assert_eq!(
        statuses(&log),
        vec![
            ("drupal/token".to_string(), PackageStatus::Ok),
            ("drupal/gin".to_string(), PackageStatus::Ok),
            ("symfony/yaml".to_string(), PackageStatus::NotApplicable),
        ]
    );
}

#[test]
fn dev_mode_from_environment() {
    let project = project();
    let setup = project.setup_with(&project.global(), &[("COMPOSER_DEV_MODE", "1")]);
    let installed = setup.installed().unwrap();
    let log = MemoryLog::new();

    execute(&setup, &installed, &StdFilesystem, &log);

    assert!(!project.exists("web/modules/contrib/token/tests"));
    assert!(project.exists("web/modules/contrib/token/README.md"));
    assert!(project.exists("web/themes/contrib/gin/node_modules"));
    // An empty dev entry makes the theme eligible but leaves nothing to do.
    assert_eq!(statuses(&log)[1].1, PackageStatus::NotApplicable);
}

#[test]
fn no_dev_flag_overrides_environment() {
    let project = project();
    let global = GlobalOpts {
        no_dev: true,
        ..project.global()
    };
    let setup = project.setup_with(&global, &[("COMPOSER_DEV_MODE", "1")]);
    assert!(!setup.settings.dev_mode);
    let installed = setup.installed().unwrap();

    execute(&setup, &installed, &StdFilesystem, &MemoryLog::new());

    assert!(!project.exists("web/modules/contrib/token/README.md"));
}

#[test]
fn dry_run_reports_without_deleting() {
    let project = project();
    let global = GlobalOpts {
        dry_run: true,
        ..project.global()
    };
    let setup = project.setup_with(&global, &[]);
    let installed = setup.installed().unwrap();
    let log = MemoryLog::new();

    execute(&setup, &installed, &StdFilesystem, &log);

    assert!(project.exists("web/modules/contrib/token/tests"));
    assert!(project.exists("web/modules/contrib/token/README.md"));
    assert!(project.exists("web/themes/contrib/gin/node_modules"));

    let entries = log.package_entries();
    assert_eq!(entries[0].status, PackageStatus::DryRun);
    assert_eq!(entries[0].message.as_deref(), Some("would remove 2"));
    assert!(
        log.debugs()
            .contains(&"  - Cleaning drupal/token (drupal-module): would remove 2".to_string())
    );
}

#[test]
fn verbose_messages_name_package_and_type() {
    let project = project();
    let setup = project.setup();
    let installed = setup.installed().unwrap();
    let log = MemoryLog::new();

    execute(&setup, &installed, &StdFilesystem, &log);

    let debugs = log.debugs();
    assert!(debugs.contains(&"  - Cleaning drupal/token (drupal-module): removed 2".to_string()));
    assert!(debugs.contains(
        &"  - Cleaning symfony/yaml (library): skipped as settings for package type library missing"
            .to_string()
    ));
}
