//! Scope resolution and effective rule computation.
//!
//! Exclusion compares declared pattern strings verbatim. An `exclude` entry
//! of `"README.md"` removes a rule spelled `"README.md"`; it does not protect
//! a `README.md` file matched by a broader rule such as `"*.md"`.
use crate::config::{CleanupConfig, Scope};

/// Active rule scopes for a run: `default`, then `dev` or `no-dev`.
#[must_use]
pub const fn resolve_scopes(dev_mode: bool) -> [Scope; 2] {
    [
        Scope::Default,
        if dev_mode { Scope::Dev } else { Scope::NoDev },
    ]
}

/// Return `true` when any active scope has an entry for `package_type`.
///
/// An entry with an empty list still makes the type eligible.
#[must_use]
pub fn is_package_type_eligible(config: &CleanupConfig, scopes: &[Scope], package_type: &str) -> bool {
    scopes
        .iter()
        .any(|&scope| config.rules(scope, package_type).is_some())
}

/// Effective rule set for `package_type`.
///
/// Rules of each scope are concatenated in scope order, then every rule
/// equal to an `exclude` pattern is dropped. Duplicates are kept.
#[must_use]
pub fn collect_rules(config: &CleanupConfig, scopes: &[Scope], package_type: &str) -> Vec<String> {
    let exclude = config.exclude();
    scopes
        .iter()
        .filter_map(|&scope| config.rules(scope, package_type))
        .flatten()
        .filter(|rule| !exclude.contains(rule))
        .cloned()
        .collect()
}
