//! Preview command implementation.
//!
//! The `addany preview` command shows which template a new file would get
//! and the content it would be filled with. Nothing is written.

use std::path::{Path, PathBuf};

use crate::cli::args::PreviewArgs;
use crate::error::Result;
use crate::templates::MatchKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// Exit code when no template matches.
pub const NO_MATCH_EXIT_CODE: i32 = 2;

/// The preview command implementation.
pub struct PreviewCommand {
    project_root: PathBuf,
    templates: Option<PathBuf>,
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(project_root: &Path, templates: Option<&Path>, args: PreviewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            templates: templates.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, self.templates.as_deref())?;
        let file_type = workspace.file_type(self.args.file_type);
        let file = std::path::absolute(&self.args.file)?;

        let Some(resolved) = workspace
            .resolver
            .resolve_template(&workspace.project, &file, file_type)?
        else {
            ui.warning(&format!(
                "No template matches {}",
                self.args.file.display()
            ));
            return Ok(CommandResult::failure(NO_MATCH_EXIT_CODE));
        };
        let selection = &resolved.selection;
        let content = &resolved.content;

        if self.args.raw {
            print!("{}", content);
            return Ok(CommandResult::success());
        }

        let matched_by = match selection.kind {
            MatchKind::FileName => "file name",
            MatchKind::Extension => "extension",
        };
        ui.message(&format!(
            "Template: {} ({}, matched by {})",
            selection.key,
            selection.path.display(),
            matched_by
        ));
        ui.message("");
        for line in content.lines() {
            ui.message(line);
        }

        Ok(CommandResult::success())
    }
}
