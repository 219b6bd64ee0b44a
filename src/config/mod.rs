//! Project configuration for addany.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use addany::config::load_project_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".addany");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "root_namespace: Acme").unwrap();
//!
//! let config = load_project_config(temp.path()).unwrap();
//! assert_eq!(config.root_namespace.as_deref(), Some("Acme"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_config_file, load_project_config, parse_config, ConfigPaths,
    CONFIG_DIR,
};
pub use schema::ProjectConfig;
