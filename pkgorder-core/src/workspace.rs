//! Joins discovered packages with their manifests for ordering.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::graph::{GraphSorter, SortReport};
use crate::manifest::{InternalNaming, ReaderRegistry};
use crate::package::WorkspacePackage;

/// The set of packages being ordered and the means to read their manifests.
pub struct Workspace<'a> {
    packages: IndexMap<String, WorkspacePackage>,
    readers: &'a ReaderRegistry,
    naming: InternalNaming,
}

impl<'a> Workspace<'a> {
    pub fn new(
        packages: Vec<WorkspacePackage>,
        readers: &'a ReaderRegistry,
        naming: InternalNaming,
    ) -> Self {
        Self {
            packages: packages.into_iter().map(|p| (p.id.clone(), p)).collect(),
            readers,
            naming,
        }
    }

    /// Package ids in scan order.
    pub fn ids(&self) -> Vec<String> {
        self.packages.keys().cloned().collect()
    }

    pub fn packages(&self) -> impl Iterator<Item = &WorkspacePackage> {
        self.packages.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Returns the workspace packages `id` depends on, in declaration order.
    ///
    /// Self references and internal names with no matching workspace package
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown, no reader handles its language,
    /// or its manifest cannot be read.
    pub fn dependencies(&self, id: &str) -> Result<Vec<String>> {
        let package = self.packages.get(id).ok_or_else(|| Error::PackageNotFound {
            name: id.to_string(),
            available: self.ids().join(", "),
        })?;
        let reader = self
            .readers
            .get(package.language)
            .ok_or_else(|| Error::NoReader(package.language.as_str().to_string()))?;

        let names = reader.dependency_names(&package.path)?;
        Ok(self
            .naming
            .internal_ids(names)
            .into_iter()
            .filter(|dep| dep != id && self.packages.contains_key(dep))
            .collect())
    }

    /// Orders every package in the workspace.
    ///
    /// # Errors
    ///
    /// Propagates the first manifest error encountered.
    pub fn sort_report(&self) -> Result<SortReport> {
        GraphSorter::sort_report(&self.ids(), |id| self.dependencies(id))
    }

    /// Returns the build order for every package in the workspace.
    ///
    /// # Errors
    ///
    /// Propagates the first manifest error encountered.
    pub fn build_order(&self) -> Result<Vec<String>> {
        GraphSorter::sort(&self.ids(), |id| self.dependencies(id))
    }
}
