//! Composer manifest (`composer.json`) loading.
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{CleanupConfig, EXTRA_KEY};
use crate::error::ConfigError;

/// Default manifest file name when `COMPOSER` is not set.
pub const DEFAULT_MANIFEST: &str = "composer.json";

/// Default vendor directory relative to the manifest.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// The parts of `composer.json` this tool reads.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was loaded from.
    pub path: PathBuf,
    /// Validated `extra.drupal-cleanup` tree.
    pub cleanup: CleanupConfig,
    /// `config.vendor-dir`, if set.
    pub vendor_dir: Option<String>,
}

impl Manifest {
    /// A manifest with no cleanup section and default settings.
    #[must_use]
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            cleanup: CleanupConfig::default(),
            vendor_dir: None,
        }
    }

    /// Directory containing the manifest; relative paths resolve against it.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Resolve the vendor directory.
    ///
    /// `env_override` (from `COMPOSER_VENDOR_DIR`) wins over
    /// `config.vendor-dir`, which wins over `vendor`. Relative values are
    /// joined to [`project_dir`](Self::project_dir).
    #[must_use]
    pub fn vendor_dir(&self, env_override: Option<&str>) -> PathBuf {
        let dir = env_override
            .filter(|v| !v.is_empty())
            .or(self.vendor_dir.as_deref())
            .unwrap_or(DEFAULT_VENDOR_DIR);
        self.project_dir().join(dir)
    }
}

/// Load `composer.json` from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or the
/// `drupal-cleanup` tree has the wrong shape.
pub fn load(path: &Path) -> Result<Manifest, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Parse manifest `content` that was read from `path`.
///
/// # Errors
///
/// See [`load`].
pub fn parse(path: &Path, content: &str) -> Result<Manifest, ConfigError> {
    let root: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let pointer = format!("/extra/{EXTRA_KEY}");
    let cleanup = root
        .pointer(&pointer)
        .map_or_else(|| Ok(CleanupConfig::default()), |v| {
            CleanupConfig::from_value(v, &pointer)
        })?;

    let vendor_dir = root
        .pointer("/config/vendor-dir")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Manifest {
        path: path.to_path_buf(),
        cleanup,
        vendor_dir,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Scope;

    fn parse_str(content: &str) -> Result<Manifest, ConfigError> {
        parse(Path::new("/project/composer.json"), content)
    }

    #[test]
    fn reads_cleanup_from_extra() {
        let manifest = parse_str(
            r#"{
                "name": "acme/site",
                "extra": {
                    "installer-paths": { "web/modules/contrib/{$name}": ["type:drupal-module"] },
                    "drupal-cleanup": {
                        "default": { "drupal-module": ["tests"] },
                        "exclude": ["*.txt"]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            manifest.cleanup.rules(Scope::Default, "drupal-module").unwrap(),
            ["tests"]
        );
        assert_eq!(manifest.cleanup.exclude(), ["*.txt"]);
    }

    #[test]
    fn missing_extra_yields_empty_config() {
        let manifest = parse_str(r#"{ "name": "acme/site" }"#).unwrap();
        assert!(manifest.cleanup.is_empty());
        assert!(manifest.vendor_dir.is_none());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bad_shape_is_reported_with_pointer() {
        let err = parse_str(r#"{ "extra": { "drupal-cleanup": { "no-dev": 5 } } }"#).unwrap_err();
        assert!(err.to_string().contains("/extra/drupal-cleanup/no-dev"));
    }

    #[test]
    fn vendor_dir_precedence() {
        let manifest = parse_str(r#"{ "config": { "vendor-dir": "lib/vendor" } }"#).unwrap();
        assert_eq!(
            manifest.vendor_dir(None),
            PathBuf::from("/project/lib/vendor")
        );
        assert_eq!(
            manifest.vendor_dir(Some("other")),
            PathBuf::from("/project/other")
        );
        assert_eq!(
            manifest.vendor_dir(Some("")),
            PathBuf::from("/project/lib/vendor")
        );

        let plain = parse_str("{}").unwrap();
        assert_eq!(plain.vendor_dir(None), PathBuf::from("/project/vendor"));
    }

    #[test]
    fn project_dir_of_bare_file_name_is_current_dir() {
        let manifest = parse(Path::new("composer.json"), "{}").unwrap();
        assert_eq!(manifest.project_dir(), Path::new("."));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("composer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
