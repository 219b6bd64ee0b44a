//! Loading the project, config and templates a command works against.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{load_project_config, ProjectConfig};
use crate::error::Result;
use crate::project::DirectoryProject;
use crate::templates::{default_templates_dir, FileType, TemplateResolver};

/// Everything a command needs to resolve templates in a project.
#[derive(Debug)]
pub struct Workspace {
    /// Merged project configuration.
    pub config: ProjectConfig,
    /// The project new files are added to.
    pub project: DirectoryProject,
    /// Resolver over the loaded template registry.
    pub resolver: TemplateResolver,
}

impl Workspace {
    /// Load config and templates for the project at `project_root`.
    pub fn open(project_root: &Path, templates_override: Option<&Path>) -> Result<Self> {
        let config = load_project_config(project_root)?;
        let dir = templates_dir(project_root, templates_override, &config)?;
        debug!("Using templates from {}", dir.display());

        let resolver = TemplateResolver::load(&dir)?;
        let project = DirectoryProject::from_config(project_root, &config);

        Ok(Self {
            config,
            project,
            resolver,
        })
    }

    /// The file type to use when the command line did not name one.
    pub fn file_type(&self, requested: Option<FileType>) -> FileType {
        requested.or(self.config.default_type).unwrap_or_default()
    }
}

/// Pick the templates directory.
///
/// Precedence: explicit override, then `templates_dir` from config
/// (relative to the project root), then `Templates/` beside the binary.
pub fn templates_dir(
    project_root: &Path,
    templates_override: Option<&Path>,
    config: &ProjectConfig,
) -> Result<PathBuf> {
    if let Some(dir) = templates_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.templates_dir {
        return Ok(project_root.join(dir));
    }
    default_templates_dir()
}
