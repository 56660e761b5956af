//! Command: print the effective rule set for a package type.
use anyhow::Result;

use super::CommandSetup;
use crate::cli::{GlobalOpts, RulesOpts};
use crate::logging::{Log, Logger};
use crate::rules::{collect_rules, is_package_type_eligible, resolve_scopes};

/// Run the rules command: print the effective rule set, one per line.
///
/// # Errors
///
/// Returns an error if the manifest or rules file cannot be loaded.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, opts: &RulesOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    for rule in effective_rules(&setup, &opts.package_type, log) {
        println!("{rule}");
    }
    Ok(())
}

/// Effective rules for `package_type` under the setup's dev mode.
#[must_use]
pub fn effective_rules(setup: &CommandSetup, package_type: &str, log: &dyn Log) -> Vec<String> {
    let scopes = resolve_scopes(setup.settings.dev_mode);
    log.debug(&format!(
        "scopes: {}",
        scopes.map(|s| s.to_string()).join(", ")
    ));

    if !is_package_type_eligible(&setup.config, &scopes, package_type) {
        log.info(&format!("no rules configured for {package_type}"));
        return Vec::new();
    }
    collect_rules(&setup.config, &scopes, package_type)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{CleanupConfig, Settings};
    use crate::logging::MemoryLog;
    use serde_json::json;

    fn setup(dev_mode: bool) -> CommandSetup {
        CommandSetup {
            manifest_path: "composer.json".into(),
            config: CleanupConfig::from_value(
                &json!({
                    "default": { "drupal-module": ["tests", "*.md", "LICENSE.txt"] },
                    "dev": { "drupal-module": ["phpunit.xml.dist"] },
                    "no-dev": { "drupal-module": ["docs"] },
                    "exclude": ["LICENSE.txt"]
                }),
                "",
            )
            .unwrap(),
            settings: Settings {
                dev_mode,
                ..Settings::default()
            },
            vendor_dir: "vendor".into(),
        }
    }

    #[test]
    fn rules_follow_dev_mode() {
        let log = MemoryLog::new();
        insta::assert_snapshot!(
            effective_rules(&setup(false), "drupal-module", &log).join("\n"),
            @r"
        tests
        *.md
        docs
        "
        );
        insta::assert_snapshot!(
            effective_rules(&setup(true), "drupal-module", &log).join("\n"),
            @r"
        tests
        *.md
        phpunit.xml.dist
        "
        );
        assert!(log.debugs().contains(&"scopes: default, dev".to_string()));
    }

    #[test]
    fn unknown_type_has_no_rules() {
        let log = MemoryLog::new();
        assert!(effective_rules(&setup(true), "drupal-theme", &log).is_empty());
    }
}
