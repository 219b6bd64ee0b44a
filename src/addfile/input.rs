//! Parsing of user-entered file names.
//!
//! One input line may name several items:
//!
//! - `Order.cs, OrderTests.cs` - two files
//! - `Models/Order.cs` - a file inside a (possibly new) folder
//! - `Models/` - just the folder

use std::path::PathBuf;

use crate::error::{AddAnyError, Result};

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Whether an item is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    File,
    Folder,
}

/// A single item to create, relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub relative: PathBuf,
    pub kind: ItemKind,
}

/// Split `input` into item requests.
///
/// Entries are comma-separated and trimmed; blank entries are skipped.
///
/// # Errors
///
/// Returns `InvalidFileName` for absolute paths, `.`/`..` segments,
/// reserved characters, or when nothing was named at all.
pub fn parse_input(input: &str) -> Result<Vec<ItemRequest>> {
    let items = input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;

    if items.is_empty() {
        return Err(invalid(input, "no file name given"));
    }

    Ok(items)
}

fn parse_entry(entry: &str) -> Result<ItemRequest> {
    if entry.starts_with(['/', '\\']) {
        return Err(invalid(entry, "must be relative to the target folder"));
    }

    if let Some(c) = entry
        .chars()
        .find(|c| INVALID_CHARS.contains(c) || c.is_control())
    {
        return Err(invalid(entry, &format!("contains {:?}", c)));
    }

    let kind = if entry.ends_with(['/', '\\']) {
        ItemKind::Folder
    } else {
        ItemKind::File
    };

    let mut relative = PathBuf::new();
    for segment in entry.split(['/', '\\']).filter(|s| !s.is_empty()) {
        let segment = segment.trim();
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(invalid(entry, "contains an empty, '.' or '..' segment"));
        }
        relative.push(segment);
    }

    Ok(ItemRequest { relative, kind })
}

fn invalid(name: &str, reason: &str) -> AddAnyError {
    AddAnyError::InvalidFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
