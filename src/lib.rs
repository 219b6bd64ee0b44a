//! addany - Create new files pre-filled from templates.
//!
//! Given the name of a file to add to a project, addany picks a template
//! by file name or extension, fills in the namespace, item name and
//! migration id, and writes the result with `\r\n` line endings.
//!
//! # Modules
//!
//! - [`addfile`] - Parsing requested names and creating files and folders
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading
//! - [`error`] - Error types and result aliases
//! - [`project`] - Project context and namespace cleaning
//! - [`templates`] - Template registry, selection and resolution
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use addany::project::DirectoryProject;
//! use addany::templates::{FileType, TemplateResolver};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let templates = TempDir::new().unwrap();
//! fs::write(templates.path().join(".cs.txt"), "namespace {namespace}\nclass {itemname}\n").unwrap();
//!
//! let resolver = TemplateResolver::load(templates.path()).unwrap();
//! let project = DirectoryProject::new("/src/Shop", "Acme.Shop");
//!
//! let content = resolver
//!     .resolve(&project, "/src/Shop/Models/Order.cs".as_ref(), FileType::Default)
//!     .unwrap();
//! assert_eq!(content.as_deref(), Some("namespace Acme.Shop.Models\r\nclass Order\r\n"));
//! ```

pub mod addfile;
pub mod cli;
pub mod config;
pub mod error;
pub mod project;
pub mod templates;
pub mod ui;

pub use error::{AddAnyError, Result};
