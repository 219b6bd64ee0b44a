//! Template registry and resolution.
//!
//! Templates are plain text files named `<key>.txt` in a templates
//! directory. A key is an exact file name (`package.json`), an extension
//! (`.cs`), or an extension with a suffix (`.cs-interface`, `.cs-migration`,
//! `.cs-nutest`).
//!
//! # Example
//!
//! ```
//! use addany::project::DirectoryProject;
//! use addany::templates::{FileType, TemplateResolver};
//! use std::fs;
//! use std::path::Path;
//! use tempfile::TempDir;
//!
//! let templates = TempDir::new().unwrap();
//! fs::write(templates.path().join(".cs.txt"), "class {itemname} {}").unwrap();
//!
//! let resolver = TemplateResolver::load(templates.path()).unwrap();
//! let project = DirectoryProject::new("/src/app", "App");
//!
//! let content = resolver
//!     .resolve(&project, Path::new("/src/app/Order.cs"), FileType::Default)
//!     .unwrap();
//! assert_eq!(content.as_deref(), Some("class Order {}"));
//! ```

pub mod line_endings;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod tokens;

pub use line_endings::normalize_line_endings;
pub use matcher::{
    extension_of, is_interface_name, select_template, specific_key, FileType, MatchKind,
    TemplateSelection,
};
pub use registry::{default_templates_dir, TemplateRegistry, TEMPLATE_EXTENSION};
pub use resolver::{namespace_for, safe_item_name, ResolvedTemplate, TemplateResolver};
pub use tokens::{build_namespace, migration_id, replace_tokens, TokenValues, DEFAULT_NAMESPACE};
