//! Template resolution for a single new file.
//!
//! Resolution runs in four steps:
//! 1. select a template by file name, then by extension
//! 2. read it
//! 3. substitute `{namespace}`, `{itemname}` and `{migrationid}`
//! 4. normalize line endings to `\r\n`
//!
//! No matching template is a normal outcome and yields `Ok(None)`; the
//! caller then creates an empty file.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{AddAnyError, Result};
use crate::project::ProjectContext;

use super::line_endings::normalize_line_endings;
use super::matcher::{select_template, FileType, TemplateSelection};
use super::registry::TemplateRegistry;
use super::tokens::{build_namespace, replace_tokens, TokenValues};

/// Resolves template content for new files.
///
/// Cloning is cheap; clones share the same immutable registry.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    registry: Arc<TemplateRegistry>,
}

impl TemplateResolver {
    /// Create a resolver over a loaded registry.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Load the registry from `dir` and create a resolver over it.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self::new(TemplateRegistry::load(dir)?))
    }

    /// The registry backing this resolver.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Choose the template for `file` without reading it.
    pub fn select(&self, file: &Path, file_type: FileType) -> Option<TemplateSelection> {
        select_template(&self.registry, file, &safe_item_name(file), file_type)
    }

    /// Resolve the content for a new `file` in `project`.
    pub fn resolve(
        &self,
        project: &dyn ProjectContext,
        file: &Path,
        file_type: FileType,
    ) -> Result<Option<String>> {
        self.resolve_at(project, file, file_type, &Local::now())
    }

    /// Resolve with an explicit clock for `{migrationid}`.
    pub fn resolve_at(
        &self,
        project: &dyn ProjectContext,
        file: &Path,
        file_type: FileType,
        now: &DateTime<Local>,
    ) -> Result<Option<String>> {
        Ok(self
            .resolve_template_at(project, file, file_type, now)?
            .map(|resolved| resolved.content))
    }

    /// Resolve `file` and report which template the content came from.
    pub fn resolve_template(
        &self,
        project: &dyn ProjectContext,
        file: &Path,
        file_type: FileType,
    ) -> Result<Option<ResolvedTemplate>> {
        self.resolve_template_at(project, file, file_type, &Local::now())
    }

    /// [`resolve_template`](Self::resolve_template) with an explicit clock.
    pub fn resolve_template_at(
        &self,
        project: &dyn ProjectContext,
        file: &Path,
        file_type: FileType,
        now: &DateTime<Local>,
    ) -> Result<Option<ResolvedTemplate>> {
        let Some(selection) = self.select(file, file_type) else {
            debug!("No template for {}", file.display());
            return Ok(None);
        };

        let content = self.render(project, file, &selection, now)?;
        Ok(Some(ResolvedTemplate {
            selection,
            content: normalize_line_endings(&content),
        }))
    }

    fn render(
        &self,
        project: &dyn ProjectContext,
        file: &Path,
        selection: &TemplateSelection,
        now: &DateTime<Local>,
    ) -> Result<String> {
        info!(
            "Using template {} for {}",
            selection.path.display(),
            file.display()
        );

        let content =
            fs::read_to_string(&selection.path).map_err(|source| AddAnyError::TemplateRead {
                path: selection.path.clone(),
                source,
            })?;

        let values = TokenValues::new(namespace_for(project, file), safe_item_name(file), now);
        Ok(replace_tokens(&content, &values))
    }
}

/// Content resolved for a new file, with the template it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    /// The template that was read.
    pub selection: TemplateSelection,
    /// Substituted content with `\r\n` line endings.
    pub content: String,
}

/// Name substituted for `{itemname}`.
///
/// The file name without extension, or the whole file name for dotfiles.
pub fn safe_item_name(file: &Path) -> String {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if name.starts_with('.') {
        return name;
    }

    match name.rfind('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// Namespace for a file placed at `file` inside `project`.
pub fn namespace_for(project: &dyn ProjectContext, file: &Path) -> String {
    let relative = file
        .parent()
        .and_then(|dir| project.make_relative(dir))
        .map(|rel| project.clean_namespace(&rel));

    build_namespace(project.root_namespace(), relative.as_deref())
}
