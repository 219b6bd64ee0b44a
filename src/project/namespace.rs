//! Namespace sanitization for relative folder paths.
//!
//! A folder path such as `Models/2024 Orders` becomes `Models._2024_Orders`:
//!
//! - segments are split on `/` and `\`
//! - empty, `.` and `..` segments are dropped
//! - characters other than letters, digits and `_` become `_`
//! - a segment starting with a digit gets a leading `_`
//! - segments are joined with `.`

use std::path::{Component, Path, PathBuf};

/// Convert a relative folder path into a dotted, identifier-safe namespace.
pub fn clean_namespace(relative: &str) -> String {
    relative
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .map(clean_segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn clean_segment(segment: &str) -> String {
    let mut cleaned: String = segment
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        cleaned.insert(0, '_');
    }

    cleaned
}

/// Path of `dir` relative to `root`.
///
/// Returns `None` when `dir` is `root` itself or lies outside it.
pub fn relative_dir(root: &Path, dir: &Path) -> Option<PathBuf> {
    let rel = dir.strip_prefix(root).ok()?;
    let rel: PathBuf = rel
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();

    if rel.as_os_str().is_empty() {
        None
    } else {
        Some(rel)
    }
}
