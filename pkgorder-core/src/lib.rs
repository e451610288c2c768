//! Core library for ordering monorepo packages by their dependencies.

pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod manifest;
pub mod package;
pub mod scanner;
pub mod workspace;

pub use config::WorkspaceConfig;
pub use dot::render_dot;
pub use error::{Error, Result};
pub use graph::{CircularPackage, DependencyEdge, GraphSorter, PackageId, SortReport};
pub use manifest::{InternalNaming, ManifestReader, ReaderRegistry};
pub use package::{Language, WorkspacePackage};
pub use scanner::Scanner;
pub use workspace::Workspace;
