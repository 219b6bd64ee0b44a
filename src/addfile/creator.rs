//! Creating files and folders from parsed requests.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AddAnyError, Result};
use crate::project::ProjectContext;
use crate::templates::{FileType, TemplateResolver};

use super::input::{parse_input, ItemKind, ItemRequest};

/// Report for one created item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CreatedItem {
    /// Path of the created file or folder.
    pub path: PathBuf,
    /// File or folder.
    pub kind: ItemKind,
    /// Template used to fill the file, if any.
    pub template: Option<PathBuf>,
}

/// Creates new files in a project, filled from templates.
pub struct FileCreator<'a> {
    resolver: &'a TemplateResolver,
    project: &'a dyn ProjectContext,
}

impl<'a> FileCreator<'a> {
    /// Create a new file creator.
    pub fn new(resolver: &'a TemplateResolver, project: &'a dyn ProjectContext) -> Self {
        Self { resolver, project }
    }

    /// Parse `input` and create every item under `base_dir`.
    ///
    /// All names are validated and checked for existing files before
    /// anything is written.
    pub fn create_all(
        &self,
        base_dir: &Path,
        input: &str,
        file_type: FileType,
    ) -> Result<Vec<CreatedItem>> {
        let items = parse_input(input)?;

        for item in items.iter().filter(|i| i.kind == ItemKind::File) {
            let path = base_dir.join(&item.relative);
            if path.exists() {
                return Err(AddAnyError::FileExists { path });
            }
        }

        items
            .iter()
            .map(|item| self.create(base_dir, item, file_type))
            .collect()
    }

    /// Create a single item under `base_dir`.
    pub fn create(
        &self,
        base_dir: &Path,
        item: &ItemRequest,
        file_type: FileType,
    ) -> Result<CreatedItem> {
        let path = base_dir.join(&item.relative);

        match item.kind {
            ItemKind::Folder => {
                fs::create_dir_all(&path)?;
                debug!("Created folder {}", path.display());
                Ok(CreatedItem {
                    path,
                    kind: ItemKind::Folder,
                    template: None,
                })
            }
            ItemKind::File => self.create_file(path, file_type),
        }
    }

    fn create_file(&self, path: PathBuf, file_type: FileType) -> Result<CreatedItem> {
        let resolved = self
            .resolver
            .resolve_template(self.project, &path, file_type)?;
        let (template, content) = match resolved {
            Some(r) => (Some(r.selection.path), r.content),
            None => (None, String::new()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    AddAnyError::FileExists { path: path.clone() }
                } else {
                    AddAnyError::Io(e)
                }
            })?;
        file.write_all(content.as_bytes())?;

        match &template {
            Some(t) => info!("Created {} from {}", path.display(), t.display()),
            None => info!("Created empty file {}", path.display()),
        }

        Ok(CreatedItem {
            path,
            kind: ItemKind::File,
            template,
        })
    }
}
