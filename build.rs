//! Embeds the release version for `drupal-cleanup --version`.
#![allow(clippy::print_stdout)]

use std::process::Command;

fn main() {
    // Prefer DRUPAL_CLEANUP_VERSION if set (e.g. by a release workflow),
    // otherwise fall back to git describe for local builds.
    if let Ok(version) = std::env::var("DRUPAL_CLEANUP_VERSION") {
        println!("cargo:rustc-env=DRUPAL_CLEANUP_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=DRUPAL_CLEANUP_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DRUPAL_CLEANUP_VERSION");
}
