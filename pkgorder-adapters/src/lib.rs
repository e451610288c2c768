pub mod js;
pub mod rust;

pub use js::JsReader;
pub use rust::RustReader;

use std::path::Path;

use pkgorder_core::error::{Error, Result};
use pkgorder_core::manifest::{ManifestReader, ReaderRegistry};
use pkgorder_core::package::Language;

pub fn get_reader(language: &Language) -> Box<dyn ManifestReader> {
    match language {
        Language::Js => Box::new(JsReader),
        Language::Rust => Box::new(RustReader),
    }
}

/// All built-in readers. `package.json` is checked before `Cargo.toml`.
pub fn default_registry() -> ReaderRegistry {
    ReaderRegistry::new()
        .with(get_reader(&Language::Js))
        .with(get_reader(&Language::Rust))
}

/// Directory name of a package, used to label manifest errors.
pub(crate) fn package_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Manifest {
            package: path.display().to_string(),
            message: format!("Invalid package path: {}", path.display()),
        })
}
