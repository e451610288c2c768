use std::fs;
use std::path::Path;

use pkgorder_core::error::{Error, Result};
use pkgorder_core::manifest::ManifestReader;
use pkgorder_core::package::Language;
use toml::Value;
use tracing::trace;

use crate::package_name;

const DEPENDENCY_SECTIONS: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

pub struct RustReader;

impl ManifestReader for RustReader {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn manifest_file(&self) -> &'static str {
        "Cargo.toml"
    }

    fn dependency_names(&self, path: &Path) -> Result<Vec<String>> {
        let cargo_toml_path = path.join("Cargo.toml");
        let package_name = package_name(path)?;
        let content = fs::read_to_string(&cargo_toml_path).map_err(|e| Error::Manifest {
            package: package_name.to_string(),
            message: format!(
                "Failed to read Cargo.toml at {}: {}",
                cargo_toml_path.display(),
                e
            ),
        })?;

        let toml: Value = content.parse().map_err(|e| Error::Manifest {
            package: package_name.to_string(),
            message: format!(
                "Failed to parse Cargo.toml at {}: {}. File may be malformed.",
                cargo_toml_path.display(),
                e
            ),
        })?;

        let mut names = Vec::new();
        for section in DEPENDENCY_SECTIONS {
            let Some(deps) = toml.get(section).and_then(|v| v.as_table()) else {
                continue;
            };
            for (key, spec) in deps {
                // `alias = { package = "real-name" }` refers to `real-name`.
                let name = spec
                    .get("package")
                    .and_then(|v| v.as_str())
                    .unwrap_or(key);
                names.push(name.to_string());
            }
        }

        trace!(package = package_name, count = names.len(), "read Cargo.toml dependencies");
        Ok(names)
    }
}
