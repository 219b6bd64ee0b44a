//! Project context for template resolution.
//!
//! Resolution only needs a narrow view of the project a file is added to:
//! its root folder, its root namespace and a way to turn a folder into a
//! namespace. [`ProjectContext`] captures that view so the resolver can be
//! driven by any project model; [`DirectoryProject`] is the plain
//! directory-backed implementation used by the CLI.

pub mod namespace;

pub use namespace::{clean_namespace, relative_dir};

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;

/// Capabilities the resolver needs from a project.
pub trait ProjectContext {
    /// Root folder of the project.
    fn root_folder(&self) -> &Path;

    /// Root namespace; empty when the project has none.
    fn root_namespace(&self) -> &str;

    /// Path of `dir` relative to the project root, if inside it.
    fn make_relative(&self, dir: &Path) -> Option<PathBuf> {
        relative_dir(self.root_folder(), dir)
    }

    /// Convert a relative folder path into a namespace fragment.
    fn clean_namespace(&self, relative: &Path) -> String {
        clean_namespace(&relative.to_string_lossy())
    }
}

/// A project rooted at a plain directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryProject {
    root: PathBuf,
    root_namespace: String,
}

impl DirectoryProject {
    /// Create a project at `root` with the given root namespace.
    pub fn new(root: impl Into<PathBuf>, root_namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            root_namespace: root_namespace.into(),
        }
    }

    /// Create a project from its loaded configuration.
    pub fn from_config(root: &Path, config: &ProjectConfig) -> Self {
        Self::new(root, config.root_namespace.clone().unwrap_or_default())
    }
}

impl ProjectContext for DirectoryProject {
    fn root_folder(&self) -> &Path {
        &self.root
    }

    fn root_namespace(&self) -> &str {
        &self.root_namespace
    }
}
