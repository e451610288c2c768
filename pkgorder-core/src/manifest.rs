//! Manifest reader trait and internal dependency naming.

use std::path::Path;

use indexmap::IndexSet;

use crate::error::Result;
use crate::package::Language;

/// Reads declared dependency names from a package manifest.
///
/// Readers only report what the manifest declares. Deciding which names are
/// workspace-internal is left to [`InternalNaming`].
pub trait ManifestReader: Send + Sync {
    fn language(&self) -> Language;
    fn manifest_file(&self) -> &'static str;

    fn detect(&self, path: &Path) -> bool {
        path.join(self.manifest_file()).is_file()
    }

    /// Returns every dependency name declared by the manifest in `path`, in
    /// declaration order.
    fn dependency_names(&self, path: &Path) -> Result<Vec<String>>;
}

/// Maps dependency names to workspace package ids by namespace prefix.
///
/// With prefix `@acme/`, the dependency `@acme/ui` refers to package `ui`
/// and `react` is external.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalNaming {
    prefix: String,
}

impl InternalNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the package id for an internal dependency name.
    #[inline]
    pub fn package_id<'a>(&self, dependency: &'a str) -> Option<&'a str> {
        dependency
            .strip_prefix(self.prefix.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Filters `names` down to internal package ids, first occurrence wins.
    pub fn internal_ids<I, S>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: IndexSet<String> = names
            .into_iter()
            .filter_map(|name| self.package_id(name.as_ref()).map(str::to_string))
            .collect();
        ids.into_iter().collect()
    }
}

/// Manifest readers in detection priority order.
#[derive(Default)]
pub struct ReaderRegistry {
    readers: Vec<Box<dyn ManifestReader>>,
}

impl ReaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reader. Earlier registrations win when several readers
    /// detect the same directory.
    pub fn register(&mut self, reader: Box<dyn ManifestReader>) {
        self.readers.push(reader);
    }

    pub fn with(mut self, reader: Box<dyn ManifestReader>) -> Self {
        self.register(reader);
        self
    }

    /// Returns the first reader that recognises the directory.
    pub fn detect(&self, path: &Path) -> Option<&dyn ManifestReader> {
        self.readers
            .iter()
            .find(|reader| reader.detect(path))
            .map(|reader| &**reader)
    }

    pub fn get(&self, language: Language) -> Option<&dyn ManifestReader> {
        self.readers
            .iter()
            .find(|reader| reader.language() == language)
            .map(|reader| &**reader)
    }
}
