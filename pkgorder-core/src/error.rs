//! Error types and result aliases.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {context}: {error}")]
    Toml {
        error: toml::de::Error,
        context: String,
    },

    #[error("Packages directory not found: {0}. Set 'packages_dir' in pkgorder.toml or pass --packages-dir.")]
    PackagesDirNotFound(PathBuf),

    #[error("Package not found: {name}. Available packages: {available}")]
    PackageNotFound { name: String, available: String },

    #[error("Manifest error for {package}: {message}")]
    Manifest { package: String, message: String },

    #[error("No manifest reader registered for language: {0}")]
    NoReader(String),
}

pub type Result<T> = std::result::Result<T, Error>;
