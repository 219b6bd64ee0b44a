//! List command implementation.
//!
//! The `addany list` command lists the templates in the registry.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::templates::{registry::template_key, TemplateRegistry};
use crate::ui::theme::AddAnyTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// One template as shown by `addany list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Lookup key, e.g. `.cs-interface` or `package.json`.
    pub key: String,
    /// Path relative to the templates directory.
    pub path: PathBuf,
}

/// Collect the entries of `registry`, sorted by key.
pub fn template_entries(registry: &TemplateRegistry) -> Vec<TemplateEntry> {
    let mut entries: Vec<TemplateEntry> = registry
        .files()
        .iter()
        .filter_map(|file| {
            let key = template_key(file)?;
            let path = file.strip_prefix(registry.root()).unwrap_or(file);
            Some(TemplateEntry {
                key,
                path: path.to_path_buf(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.key.to_lowercase().cmp(&b.key.to_lowercase()));
    entries
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    templates: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, templates: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            templates: templates.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, self.templates.as_deref())?;
        let registry = workspace.resolver.registry();
        let entries = template_entries(registry);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            AddAnyTheme::new()
        } else {
            AddAnyTheme::plain()
        };

        if entries.is_empty() {
            ui.warning(&format!(
                "No templates found in {}",
                registry.root().display()
            ));
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "  {} {}",
            theme.key.apply_to("Templates:"),
            theme.path.apply_to(registry.root().display())
        ));
        for entry in &entries {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(&entry.key),
                theme.dim.apply_to(format!("({})", entry.path.display()))
            ));
        }

        Ok(CommandResult::success())
    }
}
