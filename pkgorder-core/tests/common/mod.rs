use std::fs;
use std::path::Path;

use pkgorder_core::error::{Error, Result};
use pkgorder_core::manifest::ManifestReader;
use pkgorder_core::package::Language;

/// Reads one dependency name per line from `deps.txt`.
pub struct ListReader;

impl ManifestReader for ListReader {
    fn language(&self) -> Language {
        Language::Js
    }

    fn manifest_file(&self) -> &'static str {
        "deps.txt"
    }

    fn dependency_names(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path.join("deps.txt")).map_err(|e| Error::Manifest {
            package: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

pub fn create_package(dir: &Path, name: &str, deps: &[&str]) {
    let pkg_dir = dir.join(name);
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(pkg_dir.join("deps.txt"), deps.join("\n")).unwrap();
}
