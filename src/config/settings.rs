//! Per-run settings built once from the environment and CLI flags.

/// Environment variable that disables cleanup entirely.
pub const SKIP_ENV: &str = "DRUPAL_CLEANUP_SKIP";

/// Environment variable Composer sets to `1` when dev packages are installed.
pub const DEV_MODE_ENV: &str = "COMPOSER_DEV_MODE";

/// Environment variable naming the manifest file.
pub const MANIFEST_ENV: &str = "COMPOSER";

/// Environment variable overriding the vendor directory.
pub const VENDOR_DIR_ENV: &str = "COMPOSER_VENDOR_DIR";

/// Flags that control one cleanup run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Global kill switch; no globbing or deletion happens when set.
    pub skip: bool,
    /// Select the `dev` scope instead of `no-dev`.
    pub dev_mode: bool,
    /// Expand rules and report matches without deleting anything.
    pub dry_run: bool,
}

impl Settings {
    /// Build settings from an arbitrary variable lookup.
    ///
    /// `DRUPAL_CLEANUP_SKIP` is truthy unless unset, empty or `"0"`.
    /// Dev mode requires `COMPOSER_DEV_MODE` to be exactly `"1"`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            skip: lookup(SKIP_ENV).is_some_and(|v| is_truthy(&v)),
            dev_mode: lookup(DEV_MODE_ENV).is_some_and(|v| v == "1"),
            dry_run: false,
        }
    }

    /// Override dev mode from `--dev` / `--no-dev`.
    #[must_use]
    pub const fn with_dev_mode(mut self, dev_mode: Option<bool>) -> Self {
        if let Some(dev) = dev_mode {
            self.dev_mode = dev;
        }
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Loose truthiness of an environment value: empty and `"0"` are false.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
