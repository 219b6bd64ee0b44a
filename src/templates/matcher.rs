//! Template selection by file name and extension.
//!
//! A dedicated template for the exact file name (e.g. `package.json.txt`)
//! always wins. Otherwise a template for the extension (e.g. `.cs.txt`) is
//! selected and refined by the first rule that applies:
//!
//! 1. interface-style base name (`IRepository`) → `.cs-interface`
//! 2. [`FileType::Migration`] → `.cs-migration`
//! 3. [`FileType::NUnitTest`] → `.cs-nutest`
//! 4. otherwise the bare extension
//!
//! The refined key is final: when `.cs-interface.txt` is not registered the
//! selection still points at it, and reading it fails for that request.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::registry::{TemplateRegistry, TEMPLATE_EXTENSION};

static INTERFACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^I[A-Z]").expect("valid interface name regex"));

/// Kind of file being added, chosen by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    /// A plain file.
    #[default]
    Default,
    /// A database migration.
    Migration,
    /// An NUnit test fixture.
    #[serde(rename = "nunit-test")]
    #[value(name = "nunit-test")]
    NUnitTest,
}

impl FileType {
    /// Key suffix this type adds to an extension template.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Migration => Some(MIGRATION_SUFFIX),
            Self::NUnitTest => Some(NUNIT_TEST_SUFFIX),
        }
    }
}

/// Suffix for interface templates.
pub const INTERFACE_SUFFIX: &str = "-interface";
/// Suffix for migration templates.
pub const MIGRATION_SUFFIX: &str = "-migration";
/// Suffix for NUnit test templates.
pub const NUNIT_TEST_SUFFIX: &str = "-nutest";

/// How a template was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Template named after the full file name.
    FileName,
    /// Template named after the extension, possibly suffixed.
    Extension,
}

/// A template chosen for a target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSelection {
    /// Absolute path of the template file.
    pub path: PathBuf,
    /// Key the template was found under (e.g. `.cs-interface`).
    pub key: String,
    /// Whether the key came from the file name or the extension.
    pub kind: MatchKind,
}

/// Check whether `name` follows the interface naming convention:
/// an `I` followed by an uppercase letter.
pub fn is_interface_name(name: &str) -> bool {
    INTERFACE_NAME.is_match(name)
}

/// Build the refined extension key for a target.
///
/// Exactly one rule applies, checked in order interface, migration,
/// nutest, none.
pub fn specific_key(safe_name: &str, extension: &str, file_type: FileType) -> String {
    if is_interface_name(safe_name) {
        return format!("{}{}", extension, INTERFACE_SUFFIX);
    }

    match file_type.suffix() {
        Some(suffix) => format!("{}{}", extension, suffix),
        None => extension.to_string(),
    }
}

/// Lowercased extension of `file`, including the leading dot.
///
/// Dotfiles such as `.gitignore` have no extension.
pub fn extension_of(file: &Path) -> String {
    file.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Select a template for `file` from `registry`.
///
/// Returns `None` when neither a file-name nor an extension template exists.
/// Once the extension template exists, the refined key (e.g. `.cs-interface`)
/// is selected whether or not it is registered; an unregistered one resolves
/// to `<root>/<key>.txt`.
pub fn select_template(
    registry: &TemplateRegistry,
    file: &Path,
    safe_name: &str,
    file_type: FileType,
) -> Option<TemplateSelection> {
    let name = file.file_name()?.to_str()?;

    if let Some(path) = registry.find(name) {
        debug!("Template for {} matched by file name", name);
        return Some(TemplateSelection {
            path: path.to_path_buf(),
            key: name.to_string(),
            kind: MatchKind::FileName,
        });
    }

    let extension = extension_of(file);
    if extension.is_empty() || !registry.contains(&extension) {
        return None;
    }

    let key = specific_key(safe_name, &extension, file_type);
    let path = match registry.find(&key) {
        Some(path) => path.to_path_buf(),
        None => {
            debug!("Template key {} is not registered", key);
            registry.root().join(format!("{}{}", key, TEMPLATE_EXTENSION))
        }
    };

    debug!("Template for {} matched by extension key {}", name, key);
    Some(TemplateSelection {
        path,
        key,
        kind: MatchKind::Extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry(files: &[&str]) -> (TempDir, TemplateRegistry) {
        let temp = TempDir::new().unwrap();
        for f in files {
            fs::write(temp.path().join(f), "body").unwrap();
        }
        let registry = TemplateRegistry::load(temp.path()).unwrap();
        (temp, registry)
    }

    #[test]
    fn interface_name_predicate() {
        assert!(is_interface_name("IRepository"));
        assert!(is_interface_name("IA"));
        assert!(!is_interface_name("Item"));
        assert!(!is_interface_name("I"));
        assert!(!is_interface_name("iRepository"));
        assert!(!is_interface_name("Ireland"));
        assert!(!is_interface_name(""));
    }

    #[test]
    fn specific_key_rule_order() {
        assert_eq!(
            specific_key("IRepository", ".cs", FileType::Migration),
            ".cs-interface"
        );
        assert_eq!(
            specific_key("AddUsers", ".cs", FileType::Migration),
            ".cs-migration"
        );
        assert_eq!(
            specific_key("OrderTests", ".cs", FileType::NUnitTest),
            ".cs-nutest"
        );
        assert_eq!(specific_key("Order", ".cs", FileType::Default), ".cs");
    }

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(extension_of(Path::new("Foo.CS")), ".cs");
        assert_eq!(extension_of(Path::new("a/b/c.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
        assert_eq!(extension_of(Path::new("trailing.")), "");
    }

    #[test]
    fn file_name_match_wins() {
        let (_t, reg) = registry(&["package.json.txt", ".json.txt"]);
        let sel = select_template(&reg, Path::new("/p/package.json"), "package", FileType::Default)
            .unwrap();
        assert_eq!(sel.kind, MatchKind::FileName);
        assert_eq!(sel.key, "package.json");
    }

    #[test]
    fn file_name_match_beats_interface_rule() {
        let (_t, reg) = registry(&["IFoo.cs.txt", ".cs.txt", ".cs-interface.txt"]);
        let sel =
            select_template(&reg, Path::new("IFoo.cs"), "IFoo", FileType::Default).unwrap();
        assert_eq!(sel.kind, MatchKind::FileName);
        assert!(sel.path.ends_with("IFoo.cs.txt"));
    }

    #[test]
    fn bare_extension_match() {
        let (_t, reg) = registry(&[".cs.txt", ".cs-interface.txt"]);
        let sel =
            select_template(&reg, Path::new("Order.cs"), "Order", FileType::Default).unwrap();
        assert_eq!(sel.kind, MatchKind::Extension);
        assert_eq!(sel.key, ".cs");
    }

    #[test]
    fn interface_beats_migration_hint() {
        let (_t, reg) = registry(&[".cs.txt", ".cs-interface.txt", ".cs-migration.txt"]);
        let sel = select_template(
            &reg,
            Path::new("IRepository.cs"),
            "IRepository",
            FileType::Migration,
        )
        .unwrap();
        assert_eq!(sel.key, ".cs-interface");
        assert!(sel.path.ends_with(".cs-interface.txt"));
    }

    #[test]
    fn nunit_hint_selects_nutest() {
        let (_t, reg) = registry(&[".cs.txt", ".cs-nutest.txt"]);
        let sel = select_template(
            &reg,
            Path::new("OrderTests.cs"),
            "OrderTests",
            FileType::NUnitTest,
        )
        .unwrap();
        assert_eq!(sel.key, ".cs-nutest");
    }

    #[test]
    fn missing_refined_template_is_still_selected() {
        let (t, reg) = registry(&[".cs.txt"]);

        let sel = select_template(
            &reg,
            Path::new("IRepository.cs"),
            "IRepository",
            FileType::Default,
        )
        .unwrap();
        assert_eq!(sel.key, ".cs-interface");
        assert_eq!(sel.path, t.path().join(".cs-interface.txt"));

        let sel =
            select_template(&reg, Path::new("AddX.cs"), "AddX", FileType::Migration).unwrap();
        assert_eq!(sel.key, ".cs-migration");
        assert!(!sel.path.exists());
    }

    #[test]
    fn refined_template_requires_extension_template() {
        let (_t, reg) = registry(&[".cs-interface.txt"]);
        let sel = select_template(
            &reg,
            Path::new("IRepository.cs"),
            "IRepository",
            FileType::Default,
        );
        assert!(sel.is_none());
    }

    #[test]
    fn no_match_returns_none() {
        let (_t, reg) = registry(&[".cs.txt"]);
        assert!(select_template(&reg, Path::new("data.dat"), "data", FileType::Default).is_none());
        assert!(select_template(&reg, Path::new("Makefile"), "Makefile", FileType::Default).is_none());
    }

    #[test]
    fn uppercase_extension_matches() {
        let (_t, reg) = registry(&[".cs.txt"]);
        let sel = select_template(&reg, Path::new("Order.CS"), "Order", FileType::Default);
        assert!(sel.is_some());
    }

    #[test]
    fn file_type_suffixes() {
        assert_eq!(FileType::Default.suffix(), None);
        assert_eq!(FileType::Migration.suffix(), Some("-migration"));
        assert_eq!(FileType::NUnitTest.suffix(), Some("-nutest"));
    }

    #[test]
    fn file_type_parses_from_yaml() {
        let t: FileType = serde_yaml::from_str("nunit-test").unwrap();
        assert_eq!(t, FileType::NUnitTest);
        let t: FileType = serde_yaml::from_str("migration").unwrap();
        assert_eq!(t, FileType::Migration);
    }
}
