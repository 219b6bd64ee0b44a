//! Template discovery.
//!
//! The registry is built once from a templates directory and never changes
//! afterwards. Lookups compare file names case-insensitively.

use crate::error::{AddAnyError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension every template file carries.
pub const TEMPLATE_EXTENSION: &str = ".txt";

/// Name of the templates directory shipped next to the binary.
pub const TEMPLATES_DIR_NAME: &str = "Templates";

/// Immutable index of template files.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl TemplateRegistry {
    /// Scan `dir` recursively for template files.
    ///
    /// # Errors
    ///
    /// Returns `TemplatesNotFound` if `dir` is not a directory and
    /// `TemplatesUnreadable` if any part of it cannot be listed.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(AddAnyError::TemplatesNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        Self::scan_recursive(dir, &mut files).map_err(|e| AddAnyError::TemplatesUnreadable {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        files.sort();

        debug!("Loaded {} templates from {}", files.len(), dir.display());

        Ok(Self {
            root: dir.to_path_buf(),
            files,
        })
    }

    /// Load from the `Templates` directory beside the running executable.
    pub fn beside_executable() -> Result<Self> {
        Self::load(&default_templates_dir()?)
    }

    fn scan_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            // Symlinked directories are not followed.
            if entry.file_type()?.is_dir() {
                Self::scan_recursive(&path, files)?;
            } else if is_template_file(&path) && path.is_file() {
                files.push(path);
            }
        }

        Ok(())
    }

    /// The directory this registry was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the template file named `<key>.txt`, ignoring case.
    pub fn find(&self, key: &str) -> Option<&Path> {
        let wanted = format!("{}{}", key, TEMPLATE_EXTENSION).to_lowercase();
        self.files
            .iter()
            .find(|f| {
                f.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.to_lowercase() == wanted)
                    .unwrap_or(false)
            })
            .map(|f| f.as_path())
    }

    /// Check if a template exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// All template keys (file names without the template extension).
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.files.iter().filter_map(|f| template_key(f)).collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// All discovered template files, sorted.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of template files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no template files were found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Path of the `Templates` directory beside the running executable.
pub fn default_templates_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .map(|p| p.join(TEMPLATES_DIR_NAME))
        .ok_or_else(|| AddAnyError::TemplatesNotFound {
            path: PathBuf::from(TEMPLATES_DIR_NAME),
        })?;
    Ok(dir)
}

fn is_template_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase().ends_with(TEMPLATE_EXTENSION))
        .unwrap_or(false)
}

/// Template key for a template file path, e.g. `.cs-interface` for
/// `.cs-interface.txt`.
pub fn template_key(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let cut = name.len().checked_sub(TEMPLATE_EXTENSION.len())?;
    name.get(..cut).map(|k| k.to_string())
}
