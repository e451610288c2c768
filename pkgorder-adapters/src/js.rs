use std::fs;
use std::path::Path;

use pkgorder_core::error::{Error, Result};
use pkgorder_core::manifest::ManifestReader;
use pkgorder_core::package::Language;
use serde_json::Value;
use tracing::trace;

use crate::package_name;

const DEPENDENCY_SECTIONS: [&str; 4] = [
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

pub struct JsReader;

impl ManifestReader for JsReader {
    fn language(&self) -> Language {
        Language::Js
    }

    fn manifest_file(&self) -> &'static str {
        "package.json"
    }

    fn dependency_names(&self, path: &Path) -> Result<Vec<String>> {
        let package_json_path = path.join("package.json");
        let package_name = package_name(path)?;
        let content = fs::read_to_string(&package_json_path).map_err(|e| Error::Manifest {
            package: package_name.to_string(),
            message: format!(
                "Failed to read package.json at {}: {}",
                package_json_path.display(),
                e
            ),
        })?;

        let json: Value = serde_json::from_str(&content).map_err(|e| Error::Manifest {
            package: package_name.to_string(),
            message: format!("Failed to parse package.json: {}", e),
        })?;

        let names = DEPENDENCY_SECTIONS
            .iter()
            .filter_map(|section| json.get(section).and_then(|v| v.as_object()))
            .flat_map(|deps| deps.keys().cloned())
            .collect::<Vec<String>>();

        trace!(package = package_name, count = names.len(), "read package.json dependencies");
        Ok(names)
    }
}
