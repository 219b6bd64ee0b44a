//! Configuration schema for `.addany/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::templates::FileType;

/// Per-project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Namespace of the project root; `MyNamespace` is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_namespace: Option<String>,

    /// Templates directory (relative to the project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// File type used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_type: Option<FileType>,
}

impl ProjectConfig {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ProjectConfig) -> ProjectConfig {
        ProjectConfig {
            root_namespace: other.root_namespace.or(self.root_namespace),
            templates_dir: other.templates_dir.or(self.templates_dir),
            default_type: other.default_type.or(self.default_type),
        }
    }
}
