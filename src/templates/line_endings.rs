//! Line-ending normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Line ending written into every generated file.
pub const CRLF: &str = "\r\n";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n\r|\n|\r").expect("LINE_BREAK must compile"));

/// Replace every `\r\n`, `\n\r`, `\n` and `\r` with `\r\n`.
///
/// `\r\n` is tried first, so already-normalized text is left as is.
pub fn normalize_line_endings(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    LINE_BREAK.replace_all(content, CRLF).into_owned()
}
