//! New command implementation.
//!
//! The `addany new` command creates files and folders, filling each new
//! file from the matching template.

use std::path::{Path, PathBuf};

use crate::addfile::{CreatedItem, FileCreator, ItemKind};
use crate::cli::args::NewArgs;
use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// Prompt key used when no names are given.
pub const NAMES_PROMPT_KEY: &str = "name";

/// The new command implementation.
pub struct NewCommand {
    project_root: PathBuf,
    templates: Option<PathBuf>,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new `new` command.
    pub fn new(project_root: &Path, templates: Option<&Path>, args: NewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            templates: templates.map(Path::to_path_buf),
            args,
        }
    }

    /// Directory the items are created in.
    fn base_dir(&self) -> Result<PathBuf> {
        let dir = self.args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        Ok(std::path::absolute(dir)?)
    }

    fn names(&self, ui: &mut dyn UserInterface) -> Result<String> {
        match &self.args.names {
            Some(names) => Ok(names.clone()),
            None => ui.prompt(&Prompt::new(
                NAMES_PROMPT_KEY,
                "File name (end with / for a folder, separate several with ,)",
            )),
        }
    }

    fn report(&self, ui: &mut dyn UserInterface, item: &CreatedItem) {
        let shown = item.path.strip_prefix(&self.project_root).unwrap_or(&item.path);
        match (&item.kind, &item.template) {
            (ItemKind::Folder, _) => ui.success(&format!("Created folder {}", shown.display())),
            (ItemKind::File, Some(template)) => {
                ui.success(&format!("Created {}", shown.display()));
                if ui.output_mode().shows_details() {
                    ui.message(&format!("  template: {}", template.display()));
                }
            }
            (ItemKind::File, None) => {
                ui.success(&format!("Created {} (no template)", shown.display()))
            }
        }
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, self.templates.as_deref())?;
        let file_type = workspace.file_type(self.args.file_type);
        let names = self.names(ui)?;
        let base_dir = self.base_dir()?;

        let creator = FileCreator::new(&workspace.resolver, &workspace.project);
        let created = creator.create_all(&base_dir, &names, file_type)?;

        for item in &created {
            self.report(ui, item);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddAnyError;
    use crate::templates::FileType;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    struct Setup {
        templates: TempDir,
        project: TempDir,
    }

    fn setup() -> Setup {
        let templates = TempDir::new().unwrap();
        fs::write(
            templates.path().join(".cs.txt"),
            "namespace {namespace}\n{\n    class {itemname} { }\n}\n",
        )
        .unwrap();
        fs::write(
            templates.path().join(".cs-migration.txt"),
            "// {migrationid}\nclass {itemname} { }\n",
        )
        .unwrap();

        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join(".addany")).unwrap();
        fs::write(
            project.path().join(".addany/config.yml"),
            "root_namespace: Acme\n",
        )
        .unwrap();

        Setup { templates, project }
    }

    fn command(s: &Setup, names: Option<&str>, dir: &str, file_type: Option<FileType>) -> NewCommand {
        let args = NewArgs {
            names: names.map(String::from),
            file_type,
            dir: Some(s.project.path().join(dir)),
        };
        NewCommand::new(s.project.path(), Some(s.templates.path()), args)
    }

    #[test]
    fn creates_file_from_template() {
        let s = setup();
        let cmd = command(&s, Some("Order.cs"), "Models", None);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let content = fs::read_to_string(s.project.path().join("Models/Order.cs")).unwrap();
        assert_eq!(
            content,
            "namespace Acme.Models\r\n{\r\n    class Order { }\r\n}\r\n"
        );
        assert!(ui.has_success("Created"));
    }

    #[test]
    fn creates_several_items() {
        let s = setup();
        let cmd = command(&s, Some("A.cs, Sub/, notes.md"), ".", None);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(s.project.path().join("A.cs").is_file());
        assert!(s.project.path().join("Sub").is_dir());
        assert_eq!(
            fs::read_to_string(s.project.path().join("notes.md")).unwrap(),
            ""
        );
        assert!(ui.has_success("Created folder"));
        assert!(ui.has_success("no template"));
    }

    #[test]
    fn uses_requested_type() {
        let s = setup();
        let cmd = command(&s, Some("AddOrders.cs"), ".", Some(FileType::Migration));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let content = fs::read_to_string(s.project.path().join("AddOrders.cs")).unwrap();
        assert!(content.starts_with("// "));
        assert!(!content.contains("{migrationid}"));
    }

    #[test]
    fn prompts_when_no_names_given() {
        let s = setup();
        let cmd = command(&s, None, ".", None);
        let mut ui = MockUI::new();
        ui.set_prompt_response(NAMES_PROMPT_KEY, "Prompted.cs");

        cmd.execute(&mut ui).unwrap();

        assert!(s.project.path().join("Prompted.cs").is_file());
        assert_eq!(ui.prompts_shown(), [NAMES_PROMPT_KEY]);
    }

    #[test]
    fn refuses_existing_file() {
        let s = setup();
        fs::write(s.project.path().join("Order.cs"), "keep").unwrap();
        let cmd = command(&s, Some("Order.cs"), ".", None);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, AddAnyError::FileExists { .. }));
        assert_eq!(
            fs::read_to_string(s.project.path().join("Order.cs")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn verbose_mode_shows_template() {
        let s = setup();
        let cmd = command(&s, Some("Order.cs"), ".", None);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("template:"));
    }
}
