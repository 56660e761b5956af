//! The cleanup hook: rule resolution, glob expansion, and tolerant deletion.
//!
//! A cleanup pass never fails as a whole. Each rule that cannot be expanded
//! and each path that cannot be removed is recorded in the returned
//! [`CleanupReport`] and written to the log, and the pass moves on.
use std::path::{Path, PathBuf};

use crate::config::{CleanupConfig, Scope, Settings};
use crate::error::{ExpansionError, RemoveError};
use crate::fs::Filesystem;
use crate::logging::{Log, PackageStatus};
use crate::package::{InstallPathResolver, Package, resolve_parent, resolve_path};
use crate::rules;

/// Why a package was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `DRUPAL_CLEANUP_SKIP` is set.
    Disabled,
    /// No active scope has rules for the package type.
    NoSettings,
    /// The install path could not be resolved.
    NotInstalled(String),
}

/// What happened to one resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The path was deleted.
    Removed(PathBuf),
    /// Dry run: the path would have been deleted.
    WouldRemove(PathBuf),
    /// Deletion failed.
    Failed(RemoveError),
}

/// Expansion and deletion results for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    /// The rule as configured.
    pub rule: String,
    /// Set when the rule could not be expanded; `paths` is then empty.
    pub error: Option<ExpansionError>,
    /// One outcome per matched path, in match order.
    pub paths: Vec<PathOutcome>,
}

/// Results of cleaning one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// The cleaned package.
    pub package: Package,
    /// Directory every rule was anchored at.
    pub install_path: PathBuf,
    /// One entry per effective rule, in rule order.
    pub rules: Vec<RuleReport>,
}

impl CleanupReport {
    fn outcomes(&self) -> impl Iterator<Item = &PathOutcome> {
        self.rules.iter().flat_map(|r| r.paths.iter())
    }

    /// Number of paths actually deleted.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.outcomes()
            .filter(|o| matches!(o, PathOutcome::Removed(_)))
            .count()
    }

    /// Number of paths a dry run would delete.
    #[must_use]
    pub fn would_remove_count(&self) -> usize {
        self.outcomes()
            .filter(|o| matches!(o, PathOutcome::WouldRemove(_)))
            .count()
    }

    /// Every deletion failure, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &RemoveError> {
        self.outcomes().filter_map(|o| match o {
            PathOutcome::Failed(err) => Some(err),
            _ => None,
        })
    }

    /// Every path that was deleted, in processing order.
    pub fn removed_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes().filter_map(|o| match o {
            PathOutcome::Removed(path) => Some(path.as_path()),
            _ => None,
        })
    }
}

/// Result of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Nothing was globbed or deleted.
    Skipped(SkipReason),
    /// Rules were applied.
    Cleaned(CleanupReport),
}

impl CleanOutcome {
    /// Summary status and message for the run summary.
    #[must_use]
    pub fn summary(&self) -> (PackageStatus, Option<String>) {
        match self {
            Self::Skipped(SkipReason::NoSettings) => (PackageStatus::NotApplicable, None),
            Self::Skipped(SkipReason::Disabled) => {
                (PackageStatus::Skipped, Some("clean-up disabled".to_string()))
            }
            Self::Skipped(SkipReason::NotInstalled(msg)) => {
                (PackageStatus::Skipped, Some(msg.clone()))
            }
            Self::Cleaned(report) => {
                let failed = report.failures().count();
                if failed > 0 {
                    (
                        PackageStatus::Failed,
                        Some(format!(
                            "removed {}, {failed} failed",
                            report.removed_count()
                        )),
                    )
                } else if report.would_remove_count() > 0 {
                    (
                        PackageStatus::DryRun,
                        Some(format!("would remove {}", report.would_remove_count())),
                    )
                } else {
                    (
                        PackageStatus::Ok,
                        Some(format!("removed {}", report.removed_count())),
                    )
                }
            }
        }
    }
}

/// Applies `drupal-cleanup` rules to installed packages.
pub struct CleanupHook<'a> {
    config: &'a CleanupConfig,
    settings: Settings,
    fs: &'a dyn Filesystem,
    log: &'a dyn Log,
}

impl std::fmt::Debug for CleanupHook<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupHook")
            .field("config", &self.config)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<'a> CleanupHook<'a> {
    /// Create a hook over an already-loaded configuration.
    #[must_use]
    pub fn new(
        config: &'a CleanupConfig,
        settings: Settings,
        fs: &'a dyn Filesystem,
        log: &'a dyn Log,
    ) -> Self {
        Self {
            config,
            settings,
            fs,
            log,
        }
    }

    /// Return `true` when the global kill switch is set.
    #[must_use]
    pub const fn should_skip(&self) -> bool {
        self.settings.skip
    }

    /// Active rule scopes for this run.
    #[must_use]
    pub const fn scopes(&self) -> [Scope; 2] {
        rules::resolve_scopes(self.settings.dev_mode)
    }

    /// Return `true` when any active scope configures `package_type`.
    #[must_use]
    pub fn is_package_type_eligible(&self, package_type: &str) -> bool {
        rules::is_package_type_eligible(self.config, &self.scopes(), package_type)
    }

    /// Effective rule set for `package_type`.
    #[must_use]
    pub fn collect_rules(&self, package_type: &str) -> Vec<String> {
        rules::collect_rules(self.config, &self.scopes(), package_type)
    }

    /// Handle a "package installed" event.
    pub fn on_post_package_install(
        &self,
        package: &Package,
        resolver: &dyn InstallPathResolver,
    ) -> CleanOutcome {
        if self.should_skip() {
            self.log.debug("Clean-up is skipped");
            return CleanOutcome::Skipped(SkipReason::Disabled);
        }
        self.clean_package(package, resolver)
    }

    /// Handle a "package updated" event; the post-update `target` is cleaned.
    pub fn on_post_package_update(
        &self,
        initial: &Package,
        target: &Package,
        resolver: &dyn InstallPathResolver,
    ) -> CleanOutcome {
        if self.should_skip() {
            self.log.debug("Clean-up is skipped");
            return CleanOutcome::Skipped(SkipReason::Disabled);
        }
        if initial.package_type != target.package_type {
            self.log.debug(&format!(
                "{} changed type from {} to {}",
                target.name, initial.package_type, target.package_type
            ));
        }
        self.clean_package(target, resolver)
    }

    /// Clean one package, resolving its install path through `resolver`.
    ///
    /// The resolver is consulted only once rules are known to apply.
    pub fn clean_package(
        &self,
        package: &Package,
        resolver: &dyn InstallPathResolver,
    ) -> CleanOutcome {
        let Some(rules) = self.rules_or_skip(package) else {
            return CleanOutcome::Skipped(SkipReason::NoSettings);
        };

        match resolver.install_path(package) {
            Ok(install_path) => CleanOutcome::Cleaned(self.apply_rules(package, &install_path, &rules)),
            Err(err) => {
                self.log.error(&format!(
                    "{}: ({}) Error occurred: {err}",
                    package.name, package.package_type
                ));
                CleanOutcome::Skipped(SkipReason::NotInstalled(err.to_string()))
            }
        }
    }

    fn rules_or_skip(&self, package: &Package) -> Option<Vec<String>> {
        let rules = if self.is_package_type_eligible(&package.package_type) {
            self.collect_rules(&package.package_type)
        } else {
            Vec::new()
        };

        if rules.is_empty() {
            self.message(
                package,
                &format!(
                    "skipped as settings for package type {} missing",
                    package.package_type
                ),
            );
            return None;
        }
        Some(rules)
    }

    fn apply_rules(&self, package: &Package, install_path: &Path, rules: &[String]) -> CleanupReport {
        let mut report = CleanupReport {
            package: package.clone(),
            install_path: install_path.to_path_buf(),
            rules: Vec::with_capacity(rules.len()),
        };

        for rule in rules {
            let rule_report = match self.expand(install_path, rule) {
                Ok(paths) => RuleReport {
                    rule: rule.clone(),
                    error: None,
                    paths: paths
                        .into_iter()
                        .map(|path| self.remove(package, path))
                        .collect(),
                },
                Err(err) => {
                    self.log.debug(&format!("{}: {err}", package.name));
                    RuleReport {
                        rule: rule.clone(),
                        error: Some(err),
                        paths: Vec::new(),
                    }
                }
            };
            report.rules.push(rule_report);
        }

        if self.settings.dry_run {
            self.message(
                package,
                &format!("would remove {}", report.would_remove_count()),
            );
        } else {
            self.message(package, &format!("removed {}", report.removed_count()));
        }
        report
    }

    /// Expand `rule` at `install_path`, keeping only paths inside it.
    ///
    /// Containment is checked after resolving symlinked directories, so a
    /// rule reaching through a link to elsewhere matches nothing there.
    fn expand(&self, install_path: &Path, rule: &str) -> Result<Vec<PathBuf>, ExpansionError> {
        if rule
            .split(['/', '\\'])
            .any(|segment| segment == "..")
        {
            return Err(ExpansionError::EscapesInstallPath(rule.to_string()));
        }

        let base = resolve_path(install_path);
        let paths = self.fs.glob(install_path, rule)?;
        let (inside, outside): (Vec<_>, Vec<_>) = paths.into_iter().partition(|path| {
            let path = resolve_parent(path);
            path != base && path.starts_with(&base)
        });
        for path in &outside {
            self.log
                .debug(&format!("ignoring {} outside install path", path.display()));
        }
        if inside.is_empty() {
            self.log.debug(&format!("no matches for {rule}"));
        }
        Ok(inside)
    }

    fn remove(&self, package: &Package, path: PathBuf) -> PathOutcome {
        if self.settings.dry_run {
            self.log.dry_run(&format!("would remove {}", path.display()));
            return PathOutcome::WouldRemove(path);
        }
        match self.fs.remove(&path) {
            Ok(()) => {
                self.log.debug(&format!("removed {}", path.display()));
                PathOutcome::Removed(path)
            }
            Err(err) => {
                self.log.error(&format!(
                    "{}: ({}) Error occurred: {err}",
                    package.name, package.package_type
                ));
                PathOutcome::Failed(err)
            }
        }
    }

    fn message(&self, package: &Package, message: &str) {
        self.log.debug(&format!(
            "  - Cleaning {} ({}): {message}",
            package.name, package.package_type
        ));
    }
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
    use crate::fs::{MockFilesystem, StdFilesystem};
    use crate::logging::MemoryLog;
    use crate::package::FixedInstallPath;
    use mockall::predicate::eq;
    use serde_json::json;

    const INSTALL: &str = "/pkg";

    fn config(value: &serde_json::Value) -> CleanupConfig {
        CleanupConfig::from_value(value, "").unwrap()
    }

    fn module() -> Package {
        Package::new("drupal/token", "module")
    }

    fn resolver() -> FixedInstallPath {
        FixedInstallPath::new("drupal/token", INSTALL)
    }

    fn dev() -> Settings {
        Settings {
            dev_mode: true,
            ..Settings::default()
        }
    }

    fn report(outcome: CleanOutcome) -> CleanupReport {
        match outcome {
            CleanOutcome::Cleaned(report) => report,
            CleanOutcome::Skipped(reason) => panic!("expected cleanup, skipped: {reason:?}"),
        }
    }

    #[test]
    fn unconfigured_type_makes_no_filesystem_calls() {
        let config = config(&json!({ "default": { "drupal-theme": ["tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        let outcome = hook.on_post_package_install(&module(), &resolver());

        assert_eq!(outcome, CleanOutcome::Skipped(SkipReason::NoSettings));
        assert_eq!(
            log.debugs(),
            vec!["  - Cleaning drupal/token (module): skipped as settings for package type module missing"]
        );
    }

    #[test]
    fn empty_rule_set_after_exclusion_is_nothing_to_clean() {
        let config = config(&json!({
            "default": { "module": ["tests"] },
            "exclude": ["tests"]
        }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        assert!(hook.is_package_type_eligible("module"));
        assert_eq!(
            hook.clean_package(&module(), &resolver()),
            CleanOutcome::Skipped(SkipReason::NoSettings)
        );
    }

    #[test]
    fn skip_flag_prevents_globbing_and_deletion() {
        let config = config(&json!({ "default": { "module": ["tests", "*.md"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let settings = Settings {
            skip: true,
            ..Settings::default()
        };
        let hook = CleanupHook::new(&config, settings, &fs, &log);

        assert_eq!(
            hook.on_post_package_install(&module(), &resolver()),
            CleanOutcome::Skipped(SkipReason::Disabled)
        );
        assert_eq!(
            hook.on_post_package_update(&module(), &module(), &resolver()),
            CleanOutcome::Skipped(SkipReason::Disabled)
        );
        assert_eq!(log.debugs(), vec!["Clean-up is skipped", "Clean-up is skipped"]);
    }

    #[test]
    fn dev_mode_never_applies_no_dev_rules() {
        let config = config(&json!({
            "default": { "module": ["always"] },
            "dev": { "module": ["dev-only"] },
            "no-dev": { "module": ["prod-only"] }
        }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob()
            .withf(|_, rule| rule == "prod-only")
            .never();
        fs.expect_glob()
            .withf(|base, rule| base == Path::new(INSTALL) && (rule == "always" || rule == "dev-only"))
            .times(2)
            .returning(|_, _| Ok(Vec::new()));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, dev(), &fs, &log);

        let report = report(hook.on_post_package_install(&module(), &resolver()));
        let rules: Vec<_> = report.rules.iter().map(|r| r.rule.as_str()).collect();
        assert_eq!(rules, ["always", "dev-only"]);
    }

    #[test]
    fn one_failed_deletion_does_not_stop_the_others() {
        let config = config(&json!({ "default": { "module": ["*.md", "tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob()
            .with(eq(Path::new(INSTALL)), eq("*.md"))
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    PathBuf::from("/pkg/CHANGELOG.md"),
                    PathBuf::from("/pkg/README.md"),
                ])
            });
        fs.expect_glob()
            .with(eq(Path::new(INSTALL)), eq("tests"))
            .times(1)
            .returning(|_, _| Ok(vec![PathBuf::from("/pkg/tests")]));
        fs.expect_remove()
            .with(eq(Path::new("/pkg/CHANGELOG.md")))
            .times(1)
            .returning(|p| {
                Err(RemoveError::PermissionDenied {
                    path: p.to_path_buf(),
                })
            });
        fs.expect_remove().times(2).returning(|_| Ok(()));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        let report = report(hook.on_post_package_install(&module(), &resolver()));

        assert_eq!(report.removed_count(), 2);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(
            log.errors(),
            vec!["drupal/token: (module) Error occurred: permission denied removing /pkg/CHANGELOG.md"]
        );
        assert_eq!(
            log.debugs().last().unwrap(),
            "  - Cleaning drupal/token (module): removed 2"
        );
    }

    #[test]
    fn expansion_failure_skips_only_that_rule() {
        let config = config(&json!({ "default": { "module": ["[bad", "tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob()
            .with(eq(Path::new(INSTALL)), eq("[bad"))
            .returning(|_, rule| {
                Err(ExpansionError::InvalidPattern {
                    pattern: rule.to_string(),
                    message: "invalid range pattern".to_string(),
                })
            });
        fs.expect_glob()
            .with(eq(Path::new(INSTALL)), eq("tests"))
            .returning(|_, _| Ok(vec![PathBuf::from("/pkg/tests")]));
        fs.expect_remove().times(1).returning(|_| Ok(()));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        let report = report(hook.on_post_package_install(&module(), &resolver()));

        assert!(report.rules[0].error.is_some());
        assert!(report.rules[0].paths.is_empty());
        assert_eq!(report.removed_count(), 1);
        assert!(log.errors().is_empty());
    }

    #[test]
    fn parent_dir_rules_are_rejected_before_globbing() {
        let config = config(&json!({ "default": { "module": ["../sibling", "docs/../../x"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        let report = report(hook.on_post_package_install(&module(), &resolver()));

        assert!(report.rules.iter().all(|r| matches!(
            r.error,
            Some(ExpansionError::EscapesInstallPath(_))
        )));
    }

    #[test]
    fn paths_outside_install_path_are_dropped() {
        let config = config(&json!({ "default": { "module": ["*"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().returning(|_, _| {
            Ok(vec![
                PathBuf::from("/pkg"),
                PathBuf::from("/other/file"),
                PathBuf::from("/pkg/file"),
            ])
        });
        fs.expect_remove()
            .with(eq(Path::new("/pkg/file")))
            .times(1)
            .returning(|_| Ok(()));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);

        let report = report(hook.on_post_package_install(&module(), &resolver()));
        assert_eq!(report.removed_count(), 1);
    }

    #[test]
    fn dry_run_reports_without_removing() {
        let config = config(&json!({ "default": { "module": ["tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob()
            .returning(|_, _| Ok(vec![PathBuf::from("/pkg/tests")]));
        fs.expect_remove().never();
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default().with_dry_run(true), &fs, &log);

        let outcome = hook.on_post_package_install(&module(), &resolver());
        let (status, message) = outcome.summary();
        let report = report(outcome);

        assert_eq!(report.would_remove_count(), 1);
        assert_eq!(report.removed_count(), 0);
        assert_eq!(status, PackageStatus::DryRun);
        assert_eq!(message.as_deref(), Some("would remove 1"));
    }

    #[test]
    fn update_cleans_the_target_package() {
        let config = config(&json!({ "default": { "drupal-module": ["tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().times(1).returning(|_, _| Ok(Vec::new()));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);
        let initial = Package::new("drupal/token", "library");
        let target = Package::new("drupal/token", "drupal-module");

        let report = report(hook.on_post_package_update(&initial, &target, &resolver()));
        assert_eq!(report.package, target);
    }

    #[test]
    fn unresolvable_install_path_is_logged_not_raised() {
        let config = config(&json!({ "default": { "module": ["tests"] } }));
        let mut fs = MockFilesystem::new();
        fs.expect_glob().never();
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &fs, &log);
        let other = Package::new("drupal/other", "module");

        let outcome = hook.on_post_package_install(&other, &resolver());

        assert!(matches!(
            outcome,
            CleanOutcome::Skipped(SkipReason::NotInstalled(_))
        ));
        assert_eq!(log.errors().len(), 1);
    }

    #[test]
    fn exclusion_matches_patterns_not_expanded_paths() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("pkg");
        std::fs::create_dir_all(pkg.join("tests/src")).unwrap();
        std::fs::write(pkg.join("tests/src/FooTest.php"), "<?php").unwrap();
        std::fs::write(pkg.join("CHANGELOG.md"), "changes").unwrap();
        std::fs::write(pkg.join("README.md"), "readme").unwrap();
        std::fs::write(pkg.join("token.module"), "<?php").unwrap();

        let config = config(&json!({
            "default": { "module": ["tests", "*.md"] },
            "exclude": ["README.md"]
        }));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &StdFilesystem, &log);
        let resolver = FixedInstallPath::new("drupal/token", &pkg);

        assert_eq!(hook.collect_rules("module"), ["tests", "*.md"]);
        let report = report(hook.on_post_package_install(&module(), &resolver));

        assert_eq!(report.removed_count(), 3);
        assert!(!pkg.join("tests").exists());
        assert!(!pkg.join("CHANGELOG.md").exists());
        assert!(!pkg.join("README.md").exists());
        assert!(pkg.join("token.module").exists());
    }

    #[test]
    fn double_star_rules_match_a_single_directory_level() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("pkg");
        std::fs::create_dir_all(pkg.join("tests/unit/tests")).unwrap();
        std::fs::create_dir_all(pkg.join("src/tests")).unwrap();
        std::fs::write(pkg.join("README.md"), "readme").unwrap();
        std::fs::write(pkg.join("src/notes.md"), "notes").unwrap();

        let config = config(&json!({ "default": { "module": ["**/tests", "**/*.md"] } }));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &StdFilesystem, &log);
        let resolver = FixedInstallPath::new("drupal/token", &pkg);

        let report = report(hook.on_post_package_install(&module(), &resolver));

        assert!(report.rules.iter().all(|rule| rule.error.is_none()));
        assert_eq!(report.removed_count(), 2);
        assert!(!pkg.join("src/tests").exists());
        assert!(!pkg.join("src/notes.md").exists());
        assert!(pkg.join("tests/unit/tests").exists());
        assert!(pkg.join("README.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn rules_through_symlinked_directories_stay_inside_install_path() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("pkg");
        let outside = dir.path().join("outside");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::create_dir_all(&outside).unwrap();
        std::fs::write(outside.join("secret.txt"), "keep").unwrap();
        std::os::unix::fs::symlink(&outside, pkg.join("link")).unwrap();

        let config = config(&json!({ "default": { "module": ["link/*"] } }));
        let log = MemoryLog::new();
        let hook = CleanupHook::new(&config, Settings::default(), &StdFilesystem, &log);
        let resolver = FixedInstallPath::new("drupal/token", &pkg);

        let report = report(hook.on_post_package_install(&module(), &resolver));

        assert!(report.rules[0].paths.is_empty());
        assert!(outside.join("secret.txt").exists());
        assert!(
            log.debugs()
                .iter()
                .any(|m| m.contains("outside install path"))
        );
    }

    #[test]
    fn summary_for_each_outcome() {
        assert_eq!(
            CleanOutcome::Skipped(SkipReason::NoSettings).summary().0,
            PackageStatus::NotApplicable
        );
        assert_eq!(
            CleanOutcome::Skipped(SkipReason::Disabled).summary().0,
            PackageStatus::Skipped
        );
        let report = CleanupReport {
            package: module(),
            install_path: PathBuf::from(INSTALL),
            rules: vec![RuleReport {
                rule: "tests".to_string(),
                error: None,
                paths: vec![
                    PathOutcome::Removed(PathBuf::from("/pkg/tests")),
                    PathOutcome::Failed(RemoveError::Vanished {
                        path: PathBuf::from("/pkg/tests/x"),
                    }),
                ],
            }],
        };
        assert_eq!(
            report.removed_paths().collect::<Vec<_>>(),
            vec![Path::new("/pkg/tests")]
        );
        assert_eq!(
            CleanOutcome::Cleaned(report).summary(),
            (PackageStatus::Failed, Some("removed 1, 1 failed".to_string()))
        );
    }
}
