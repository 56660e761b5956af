// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed Composer project and a fluent builder
// so each integration test can lay out `composer.json`, `installed.json` and
// package files without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use drupal_cleanup::cli::GlobalOpts;
use drupal_cleanup::commands::CommandSetup;
use drupal_cleanup::logging::MemoryLog;
use serde_json::{Value, json};

/// A package to record in `installed.json` and create on disk.
struct PackageFixture {
    name: String,
    package_type: Option<String>,
    install_path: String,
    files: Vec<String>,
}

/// An isolated Composer project backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestProject {
    /// Temporary directory containing the project.
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Return `true` if `rel` exists inside the project.
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).symlink_metadata().is_ok()
    }

    /// Global options pointing at this project's manifest.
    pub fn global(&self) -> GlobalOpts {
        GlobalOpts {
            manifest: Some(self.path("composer.json")),
            ..GlobalOpts::default()
        }
    }

    /// Run the command setup with `env` as the only environment variables.
    pub fn setup_with(&self, global: &GlobalOpts, env: &[(&str, &str)]) -> CommandSetup {
        let lookup = |key: &str| {
            env.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        };
        CommandSetup::init_with(global, lookup, &MemoryLog::new()).expect("command setup")
    }

    /// Run the command setup with default options and an empty environment.
    pub fn setup(&self) -> CommandSetup {
        self.setup_with(&self.global(), &[])
    }
}

/// Fluent builder for [`TestProject`].
pub struct TestProjectBuilder {
    cleanup: Option<Value>,
    vendor_dir: Option<String>,
    packages: Vec<PackageFixture>,
}

impl TestProjectBuilder {
    /// Begin building a project with no cleanup section and no packages.
    pub fn new() -> Self {
        Self {
            cleanup: None,
            vendor_dir: None,
            packages: Vec::new(),
        }
    }

    /// Set `extra.drupal-cleanup`.
    pub fn cleanup(mut self, cleanup: Value) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set `config.vendor-dir`.
    pub fn vendor_dir(mut self, dir: &str) -> Self {
        self.vendor_dir = Some(dir.to_string());
        self
    }

    /// Add an installed package at `install_path` (relative to the project)
    /// containing `files`. Entries ending in `/` are created as directories.
    pub fn package(mut self, name: &str, package_type: &str, install_path: &str, files: &[&str]) -> Self {
        self.packages.push(PackageFixture {
            name: name.to_string(),
            package_type: Some(package_type.to_string()),
            install_path: install_path.to_string(),
            files: files.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// Add an installed package that declares no type.
    pub fn untyped_package(mut self, name: &str, install_path: &str, files: &[&str]) -> Self {
        self.packages.push(PackageFixture {
            name: name.to_string(),
            package_type: None,
            install_path: install_path.to_string(),
            files: files.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// Write everything to a fresh temporary directory.
    pub fn build(self) -> TestProject {
        let root = tempfile::tempdir().expect("create temp dir");
        let vendor = self.vendor_dir.clone().unwrap_or_else(|| "vendor".to_string());

        let mut manifest = json!({ "name": "acme/site", "type": "project" });
        if let Some(cleanup) = self.cleanup {
            manifest["extra"] = json!({ "drupal-cleanup": cleanup });
        }
        if let Some(dir) = &self.vendor_dir {
            manifest["config"] = json!({ "vendor-dir": dir });
        }
        write(
            &root.path().join("composer.json"),
            &serde_json::to_string_pretty(&manifest).expect("serialize manifest"),
        );

        // installed.json paths are relative to <vendor>/composer.
        let up = "../".repeat(Path::new(&vendor).components().count() + 1);
        let entries: Vec<Value> = self
            .packages
            .iter()
            .map(|p| {
                let mut entry = json!({
                    "name": p.name,
                    "install-path": format!("{up}{}", p.install_path),
                });
                if let Some(package_type) = &p.package_type {
                    entry["type"] = json!(package_type);
                }
                entry
            })
            .collect();
        write(
            &root.path().join(&vendor).join("composer/installed.json"),
            &serde_json::to_string_pretty(&json!({ "packages": entries, "dev": true }))
                .expect("serialize installed.json"),
        );

        for package in &self.packages {
            let dir = root.path().join(&package.install_path);
            std::fs::create_dir_all(&dir).expect("create package dir");
            for file in &package.files {
                if let Some(sub) = file.strip_suffix('/') {
                    std::fs::create_dir_all(dir.join(sub)).expect("create package subdir");
                } else {
                    write(&dir.join(file), "");
                }
            }
        }

        TestProject { root }
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}
