//! Command implementations for the CLI.

mod graph;
mod list;
mod order;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use pkgorder_adapters::default_registry;
use pkgorder_core::{ReaderRegistry, Scanner, Workspace, WorkspaceConfig, WorkspacePackage};
use tracing::debug;

pub use graph::cmd_graph;
pub use list::cmd_list;
pub use order::{cmd_cycles, cmd_order};

/// Workspace location flags shared by every command.
pub struct WorkspaceOptions {
    pub root: PathBuf,
    pub packages_dir: Option<PathBuf>,
    pub prefix: Option<String>,
}

/// Loaded configuration, readers and scanned packages.
struct Context {
    config: WorkspaceConfig,
    registry: ReaderRegistry,
    packages_dir: PathBuf,
    packages: Vec<WorkspacePackage>,
}

impl Context {
    fn load(options: &WorkspaceOptions) -> Result<Self> {
        let mut config = WorkspaceConfig::discover(&options.root)
            .with_context(|| format!("failed to load config from {}", options.root.display()))?;

        if let Some(packages_dir) = &options.packages_dir {
            config.packages_dir = packages_dir.display().to_string();
            // A flag path resolves against --root, not the config file location.
            config.config_path = None;
        }
        if let Some(prefix) = &options.prefix {
            config.internal_prefix = prefix.clone();
        }

        let registry = default_registry();
        let scanner = Scanner::from_config(&config, &options.root, &registry);
        let packages = scanner.scan()?;
        let packages_dir = scanner.packages_dir().to_path_buf();
        debug!(
            packages = packages.len(),
            dir = %packages_dir.display(),
            prefix = %config.internal_prefix,
            "workspace loaded"
        );

        Ok(Self {
            config,
            registry,
            packages_dir,
            packages,
        })
    }

    fn workspace(&self) -> Workspace<'_> {
        Workspace::new(
            self.packages.clone(),
            &self.registry,
            self.config.naming(),
        )
    }
}
