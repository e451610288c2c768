//! TOML configuration for the workspace (`pkgorder.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::manifest::InternalNaming;

pub const CONFIG_FILE: &str = "pkgorder.toml";

fn default_packages_dir() -> String {
    "packages".to_string()
}

/// Top-level layout of `pkgorder.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// Workspace-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory holding one subdirectory per package.
    #[serde(default = "default_packages_dir")]
    pub packages_dir: String,
    /// Namespace prefix that marks a dependency as workspace-internal.
    #[serde(default)]
    pub internal_prefix: String,
    /// Package directory names to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Path to the config file this was loaded from.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            internal_prefix: String::new(),
            exclude: Vec::new(),
            config_path: None,
        }
    }
}

impl WorkspaceConfig {
    /// Parses a config file body. `context` names the file in errors.
    pub fn parse(content: &str, context: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|error| Error::Toml {
            error,
            context: context.to_string(),
        })?;
        Ok(file.workspace)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content, &path.display().to_string())?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Walks up from `start` looking for `pkgorder.toml`.
    ///
    /// A relative `start` is taken from the current directory. Stops at the
    /// first directory containing `.git`. Returns the default configuration
    /// when no file is found.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = if start.is_absolute() {
            start.to_path_buf()
        } else {
            std::env::current_dir()?.join(start)
        };
        let mut current_dir = start.as_path();

        loop {
            let candidate = current_dir.join(CONFIG_FILE);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "loading workspace config");
                return Self::load(&candidate);
            }

            if current_dir.join(".git").exists() {
                break;
            }

            match current_dir.parent() {
                Some(parent) => {
                    if parent == current_dir {
                        break;
                    }
                    current_dir = parent;
                }
                None => break,
            }
        }

        debug!(start = %start.display(), "no {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Resolves `packages_dir` against the config file's directory, or
    /// against `fallback_root` when there is no config file.
    pub fn resolve_packages_dir(&self, fallback_root: &Path) -> PathBuf {
        let packages_dir = PathBuf::from(&self.packages_dir);
        if packages_dir.is_absolute() {
            return packages_dir;
        }
        self.config_path
            .as_ref()
            .and_then(|path| path.parent())
            .unwrap_or(fallback_root)
            .join(packages_dir)
    }

    pub fn naming(&self) -> InternalNaming {
        InternalNaming::new(self.internal_prefix.clone())
    }
}
