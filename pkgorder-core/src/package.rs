//! Workspace package model and manifest languages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Manifest ecosystems a package can be described by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Js,
    Rust,
}

impl Language {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Js => "js",
            Language::Rust => "rust",
        }
    }
}

/// A package discovered in the workspace.
///
/// The `id` is the package's directory name and is what the sorter orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspacePackage {
    pub id: String,
    pub language: Language,
    pub path: PathBuf,
}

impl WorkspacePackage {
    pub fn new(id: impl Into<String>, language: Language, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            language,
            path: path.into(),
        }
    }
}
