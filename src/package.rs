//! Package metadata and install path resolution.
//!
//! Composer records where it placed every package in
//! `<vendor-dir>/composer/installed.json`. Version 2 of that file is an
//! object with a `packages` list whose entries carry an `install-path`
//! relative to `<vendor-dir>/composer/`; version 1 is a bare list without
//! install paths, in which case packages live at `<vendor-dir>/<name>`.
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::PackageError;

/// Composer's type for packages that do not declare one.
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

/// An installed package as seen by the cleanup hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Vendor-qualified name, e.g. `drupal/token`.
    pub name: String,
    /// Composer package type, e.g. `drupal-module`.
    pub package_type: String,
}

impl Package {
    /// Create a package descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, package_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_type: package_type.into(),
        }
    }
}

/// Maps a package to the absolute directory it is installed in.
pub trait InstallPathResolver {
    /// Return the install path of `package`.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::NotInstalled`] if the resolver does not know
    /// the package.
    fn install_path(&self, package: &Package) -> Result<PathBuf, PackageError>;
}

/// One entry of `installed.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Package metadata.
    pub package: Package,
    /// Resolved install directory.
    pub install_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(rename = "type")]
    package_type: Option<String>,
    #[serde(rename = "install-path")]
    install_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInstalled {
    V2 { packages: Vec<RawEntry> },
    V1(Vec<RawEntry>),
}

/// Packages recorded in `installed.json`, in file order.
#[derive(Debug, Clone, Default)]
pub struct InstalledPackages {
    packages: Vec<InstalledPackage>,
}

impl InstalledPackages {
    /// Load `<vendor_dir>/composer/installed.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(vendor_dir: &Path) -> Result<Self, PackageError> {
        let path = vendor_dir.join("composer").join("installed.json");
        let content = std::fs::read_to_string(&path).map_err(|source| {
            PackageError::InstalledIo {
                path: path.clone(),
                source,
            }
        })?;
        Self::parse(vendor_dir, &path, &content)
    }

    /// Parse `installed.json` content read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::InstalledParse`] if the content is neither
    /// the version 1 nor the version 2 format.
    pub fn parse(vendor_dir: &Path, path: &Path, content: &str) -> Result<Self, PackageError> {
        let raw: RawInstalled =
            serde_json::from_str(content).map_err(|e| PackageError::InstalledParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let entries = match raw {
            RawInstalled::V2 { packages } | RawInstalled::V1(packages) => packages,
        };

        let composer_dir = vendor_dir.join("composer");
        let packages = entries
            .into_iter()
            .map(|entry| {
                let install_path = entry.install_path.as_deref().map_or_else(
                    || vendor_dir.join(&entry.name),
                    |rel| composer_dir.join(rel),
                );
                InstalledPackage {
                    package: Package::new(
                        entry.name,
                        entry
                            .package_type
                            .unwrap_or_else(|| DEFAULT_PACKAGE_TYPE.to_string()),
                    ),
                    install_path: resolve_path(&install_path),
                }
            })
            .collect();

        Ok(Self { packages })
    }

    /// Look up an installed package by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&InstalledPackage> {
        self.packages.iter().find(|p| p.package.name == name)
    }

    /// Iterate over all installed packages.
    pub fn iter(&self) -> impl Iterator<Item = &InstalledPackage> {
        self.packages.iter()
    }

    /// Number of installed packages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.packages.len()
    }

    /// Return `true` if nothing is installed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl InstallPathResolver for InstalledPackages {
    fn install_path(&self, package: &Package) -> Result<PathBuf, PackageError> {
        self.find(&package.name)
            .map(|p| p.install_path.clone())
            .ok_or_else(|| PackageError::NotInstalled(package.name.clone()))
    }
}

/// Resolver for a single package whose install path was given explicitly.
#[derive(Debug, Clone)]
pub struct FixedInstallPath {
    name: String,
    path: PathBuf,
}

impl FixedInstallPath {
    /// Resolve `package_name` to `path`; every other package is unknown.
    #[must_use]
    pub fn new(package_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: package_name.into(),
            path: path.into(),
        }
    }
}

impl InstallPathResolver for FixedInstallPath {
    fn install_path(&self, package: &Package) -> Result<PathBuf, PackageError> {
        if package.name == self.name {
            Ok(resolve_path(&self.path))
        } else {
            Err(PackageError::NotInstalled(package.name.clone()))
        }
    }
}

/// Canonicalize `path` when it exists, otherwise clean it lexically.
pub(crate) fn resolve_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| normalize_lexically(path))
}

/// Resolve the directories leading to `path` but keep its last component,
/// so a matched symlink is located by where it lives, not where it points.
pub(crate) fn resolve_parent(path: &Path) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => resolve_path(parent).join(name),
        _ => normalize_lexically(path),
    }
}

/// Drop `.` components and fold `..` into the preceding component.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
