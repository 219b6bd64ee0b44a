//! Configuration file discovery and loading.
//!
//! Config files are optional. When present they are merged in this order
//! (later overrides earlier):
//! 1. Project config (`.addany/config.yml`)
//! 2. Local overrides (`.addany/config.local.yml`)

use crate::config::schema::ProjectConfig;
use crate::error::{AddAnyError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding project configuration; also marks a project root.
pub const CONFIG_DIR: &str = ".addany";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .addany/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .addany/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.addany` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// An empty file yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| AddAnyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files for a project.
///
/// Returns the default config when no file exists.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut config = ProjectConfig::default();
    for path in paths.all_existing() {
        debug!("Loading config from {}", path.display());
        config = config.merge(load_config_file(path)?);
    }

    Ok(config)
}
