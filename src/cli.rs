//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI entry point for the cleanup tool.
#[derive(Parser, Debug)]
#[command(
    name = "drupal-cleanup",
    about = "Remove configured files from Composer-installed Drupal packages",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Show verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Report what would be removed without deleting anything
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Path to composer.json (defaults to $COMPOSER or ./composer.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Read rules from a TOML file instead of composer.json
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Apply the `dev` scope regardless of `COMPOSER_DEV_MODE`
    #[arg(long, global = true, conflicts_with = "no_dev")]
    pub dev: bool,

    /// Apply the `no-dev` scope regardless of `COMPOSER_DEV_MODE`
    #[arg(long, global = true)]
    pub no_dev: bool,
}

impl GlobalOpts {
    /// Dev-mode override from `--dev` / `--no-dev`, if either was given.
    #[must_use]
    pub const fn dev_mode_override(&self) -> Option<bool> {
        if self.dev {
            Some(true)
        } else if self.no_dev {
            Some(false)
        } else {
            None
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clean packages after they were installed
    Install(PackagesOpts),
    /// Clean packages after they were updated
    Update(PackagesOpts),
    /// Clean every package listed in installed.json
    All,
    /// Clean one package given its metadata explicitly
    Clean(CleanOpts),
    /// Print the effective rules for a package type
    Rules(RulesOpts),
    /// Print version information
    Version,
}

/// Options for the `install` and `update` subcommands.
#[derive(Args, Debug, Clone)]
pub struct PackagesOpts {
    /// Package names, e.g. drupal/token
    #[arg(required = true)]
    pub packages: Vec<String>,
}

/// Options for the `clean` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CleanOpts {
    /// Package name
    #[arg(long)]
    pub name: String,

    /// Package type, e.g. drupal-module
    #[arg(long = "type", value_name = "TYPE")]
    pub package_type: String,

    /// Directory the package is installed in
    #[arg(long, value_name = "DIR")]
    pub path: PathBuf,
}

/// Options for the `rules` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RulesOpts {
    /// Package type, e.g. drupal-module
    #[arg(value_name = "TYPE")]
    pub package_type: String,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install_packages() {
        let cli = Cli::parse_from(["drupal-cleanup", "install", "drupal/token", "drupal/pathauto"]);
        assert!(
            matches!(&cli.command, Command::Install(_)),
            "Expected Install command"
        );
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.packages, vec!["drupal/token", "drupal/pathauto"]);
        }
    }

    #[test]
    fn install_requires_a_package() {
        assert!(Cli::try_parse_from(["drupal-cleanup", "install"]).is_err());
    }

    #[test]
    fn parse_update() {
        let cli = Cli::parse_from(["drupal-cleanup", "update", "drupal/core"]);
        assert!(matches!(cli.command, Command::Update(_)));
    }

    #[test]
    fn parse_all_dry_run() {
        let cli = Cli::parse_from(["drupal-cleanup", "-d", "all"]);
        assert!(cli.global.dry_run);
        assert!(matches!(cli.command, Command::All));
    }

    #[test]
    fn parse_clean_explicit_metadata() {
        let cli = Cli::parse_from([
            "drupal-cleanup",
            "clean",
            "--name",
            "drupal/token",
            "--type",
            "drupal-module",
            "--path",
            "web/modules/contrib/token",
        ]);
        assert!(
            matches!(&cli.command, Command::Clean(_)),
            "Expected Clean command"
        );
        if let Command::Clean(opts) = cli.command {
            assert_eq!(opts.name, "drupal/token");
            assert_eq!(opts.package_type, "drupal-module");
            assert_eq!(opts.path, PathBuf::from("web/modules/contrib/token"));
        }
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::parse_from(["drupal-cleanup", "rules", "drupal-theme"]);
        assert!(
            matches!(&cli.command, Command::Rules(_)),
            "Expected Rules command"
        );
        if let Command::Rules(opts) = cli.command {
            assert_eq!(opts.package_type, "drupal-theme");
        }
    }

    #[test]
    fn parse_global_paths_after_subcommand() {
        let cli = Cli::parse_from([
            "drupal-cleanup",
            "all",
            "--manifest",
            "/site/composer.json",
            "--rules",
            "cleanup.toml",
        ]);
        assert_eq!(
            cli.global.manifest,
            Some(PathBuf::from("/site/composer.json"))
        );
        assert_eq!(cli.global.rules, Some(PathBuf::from("cleanup.toml")));
    }

    #[test]
    fn dev_flags() {
        let dev = Cli::parse_from(["drupal-cleanup", "--dev", "all"]);
        assert_eq!(dev.global.dev_mode_override(), Some(true));
        let no_dev = Cli::parse_from(["drupal-cleanup", "--no-dev", "all"]);
        assert_eq!(no_dev.global.dev_mode_override(), Some(false));
        let neither = Cli::parse_from(["drupal-cleanup", "all"]);
        assert_eq!(neither.global.dev_mode_override(), None);
    }

    #[test]
    fn dev_and_no_dev_conflict() {
        assert!(Cli::try_parse_from(["drupal-cleanup", "--dev", "--no-dev", "all"]).is_err());
    }

    #[test]
    fn parse_verbose_and_version() {
        let cli = Cli::parse_from(["drupal-cleanup", "-v", "version"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Version));
    }
}
