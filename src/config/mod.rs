//! Cleanup configuration: scopes, typed rule tables, and run settings.
//!
//! The rule tree lives under `extra.drupal-cleanup` in `composer.json`
//! ([`manifest`]) or in a standalone TOML file ([`rules_file`]). Both
//! sources are validated into the same [`CleanupConfig`] at load time so the
//! rest of the crate never touches untyped values.
pub mod manifest;
pub mod rules_file;
pub mod settings;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::ConfigError;

pub use settings::Settings;

/// Key of the configuration namespace inside `extra`.
pub const EXTRA_KEY: &str = "drupal-cleanup";

/// A named bucket of rules that applies under certain run conditions.
///
/// `exclude` is not a rule scope and is stored separately on
/// [`CleanupConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Always applied.
    Default,
    /// Applied when dev dependencies are installed.
    Dev,
    /// Applied when installing with `--no-dev`.
    NoDev,
}

impl Scope {
    /// All rule scopes in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Dev, Self::NoDev];

    /// The configuration key for this scope.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dev => "dev",
            Self::NoDev => "no-dev",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rules of one scope, keyed by package type.
///
/// A `None` value means the type was listed with a `null` value and is
/// treated exactly like an absent key.
pub type ScopeRules = BTreeMap<String, Option<Vec<String>>>;

/// Validated `drupal-cleanup` configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupConfig {
    scopes: BTreeMap<&'static str, ScopeRules>,
    exclude: Vec<String>,
}

impl CleanupConfig {
    /// Build a configuration from per-scope rule tables and exclusions.
    #[must_use]
    pub fn new(scopes: impl IntoIterator<Item = (Scope, ScopeRules)>, exclude: Vec<String>) -> Self {
        Self {
            scopes: scopes
                .into_iter()
                .map(|(scope, rules)| (scope.key(), rules))
                .collect(),
            exclude,
        }
    }

    /// Configured patterns for `package_type` in `scope`, or `None` when the
    /// type has no entry there.
    ///
    /// An entry with an empty list returns `Some(&[])`.
    #[must_use]
    pub fn rules(&self, scope: Scope, package_type: &str) -> Option<&[String]> {
        self.scopes
            .get(scope.key())
            .and_then(|rules| rules.get(package_type))
            .and_then(Option::as_deref)
    }

    /// Global exclusion patterns.
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Return `true` when no scope and no exclusion is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.scopes.values().all(BTreeMap::is_empty)
    }

    /// Validate the value found at `pointer` (the `drupal-cleanup` object).
    ///
    /// `null` anywhere in the tree means "absent". Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShape`] naming the first value whose type
    /// does not match the expected layout.
    pub fn from_value(value: &Value, pointer: &str) -> Result<Self, ConfigError> {
        let root = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(ConfigError::InvalidShape {
                    pointer: pointer.to_string(),
                    expected: "an object",
                });
            }
        };

        let mut scopes = Vec::new();
        for scope in Scope::ALL {
            let Some(scope_value) = root.get(scope.key()) else {
                continue;
            };
            let scope_pointer = format!("{pointer}/{}", scope.key());
            scopes.push((scope, parse_scope(scope_value, &scope_pointer)?));
        }

        let exclude = match root.get("exclude") {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => parse_patterns(list, &format!("{pointer}/exclude"))?,
        };

        Ok(Self::new(scopes, exclude))
    }
}

fn parse_scope(value: &Value, pointer: &str) -> Result<ScopeRules, ConfigError> {
    let map = match value {
        Value::Null => return Ok(ScopeRules::new()),
        Value::Object(map) => map,
        _ => {
            return Err(ConfigError::InvalidShape {
                pointer: pointer.to_string(),
                expected: "an object of package types",
            });
        }
    };

    map.iter()
        .map(|(package_type, list)| {
            let rules = match list {
                Value::Null => None,
                _ => Some(parse_patterns(
                    list,
                    &format!("{pointer}/{}", escape_pointer(package_type)),
                )?),
            };
            Ok::<_, ConfigError>((package_type.clone(), rules))
        })
        .collect()
}

fn parse_patterns(value: &Value, pointer: &str) -> Result<Vec<String>, ConfigError> {
    let Value::Array(items) = value else {
        return Err(ConfigError::InvalidShape {
            pointer: pointer.to_string(),
            expected: "a list of glob patterns",
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ConfigError::InvalidShape {
                    pointer: format!("{pointer}/{i}"),
                    expected: "a string",
                })
        })
        .collect()
}

/// Escape a key for use as a JSON pointer segment (RFC 6901).
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
