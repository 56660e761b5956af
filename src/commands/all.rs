//! Command: clean every installed package.
use anyhow::Result;

use super::{CommandSetup, finish, record};
use crate::cli::GlobalOpts;
use crate::fs::{Filesystem, StdFilesystem};
use crate::logging::{Log, Logger};
use crate::package::InstalledPackages;

/// Run the all command.
///
/// # Errors
///
/// Returns an error if the manifest or `installed.json` cannot be loaded.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let installed = setup.installed()?;
    log.info(&format!("{} installed packages", installed.len()));

    execute(&setup, &installed, &StdFilesystem, log);

    finish(log);
    Ok(())
}

/// Clean every package in `installed`, in file order.
pub fn execute(
    setup: &CommandSetup,
    installed: &InstalledPackages,
    fs: &dyn Filesystem,
    log: &dyn Log,
) {
    let hook = setup.hook(fs, log);
    if hook.should_skip() {
        log.info("clean-up disabled by DRUPAL_CLEANUP_SKIP");
    }
    log.stage(if setup.settings.dry_run {
        "Cleaning installed packages (dry run)"
    } else {
        "Cleaning installed packages"
    });

    for entry in installed.iter() {
        let outcome = hook.on_post_package_install(&entry.package, installed);
        record(log, &entry.package.name, &outcome);
    }
}
