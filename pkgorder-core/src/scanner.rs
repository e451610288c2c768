//! Package discovery under the packages directory.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::WorkspaceConfig;
use crate::error::{Error, Result};
use crate::manifest::ReaderRegistry;
use crate::package::WorkspacePackage;

/// Finds packages as immediate subdirectories of the packages directory.
///
/// A subdirectory counts as a package when a registered reader detects its
/// manifest. The directory name becomes the package id.
pub struct Scanner<'a> {
    packages_dir: PathBuf,
    readers: &'a ReaderRegistry,
    exclude: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(packages_dir: impl AsRef<Path>, readers: &'a ReaderRegistry) -> Self {
        Self {
            packages_dir: packages_dir.as_ref().to_path_buf(),
            readers,
            exclude: Vec::new(),
        }
    }

    pub fn from_config(
        config: &WorkspaceConfig,
        fallback_root: &Path,
        readers: &'a ReaderRegistry,
    ) -> Self {
        Self {
            packages_dir: config.resolve_packages_dir(fallback_root),
            readers,
            exclude: config.exclude.clone(),
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    /// Returns discovered packages sorted by id.
    ///
    /// # Errors
    ///
    /// Returns `PackagesDirNotFound` if the packages directory does not exist.
    pub fn scan(&self) -> Result<Vec<WorkspacePackage>> {
        if !self.packages_dir.is_dir() {
            return Err(Error::PackagesDirNotFound(self.packages_dir.clone()));
        }

        let mut packages = Vec::new();

        for entry in WalkDir::new(&self.packages_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
        {
            let Some(id) = entry.file_name().to_str() else {
                continue;
            };
            if id.starts_with('.') || self.exclude.iter().any(|name| name == id) {
                trace!(package = id, "skipping directory");
                continue;
            }

            match self.readers.detect(entry.path()) {
                Some(reader) => packages.push(WorkspacePackage::new(
                    id,
                    reader.language(),
                    entry.path(),
                )),
                None => trace!(path = %entry.path().display(), "no manifest found"),
            }
        }

        packages.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(
            count = packages.len(),
            dir = %self.packages_dir.display(),
            "scanned packages"
        );
        Ok(packages)
    }
}
