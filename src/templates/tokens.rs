//! Token substitution for template bodies.
//!
//! Templates may contain three literal tokens:
//!
//! - `{namespace}` - the project namespace for the new file's folder
//! - `{itemname}` - the new file's name without extension
//! - `{migrationid}` - local time as `yyyyMMddHHmm`
//!
//! Anything else in braces is left untouched.

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::{Captures, Regex};

/// Namespace used when the project has none.
pub const DEFAULT_NAMESPACE: &str = "MyNamespace";

/// Namespace token.
pub const NAMESPACE_TOKEN: &str = "{namespace}";
/// Item name token.
pub const ITEM_NAME_TOKEN: &str = "{itemname}";
/// Migration id token.
pub const MIGRATION_ID_TOKEN: &str = "{migrationid}";

const MIGRATION_ID_FORMAT: &str = "%Y%m%d%H%M";

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [NAMESPACE_TOKEN, ITEM_NAME_TOKEN, MIGRATION_ID_TOKEN]
        .map(regex::escape)
        .join("|");
    Regex::new(&pattern).expect("TOKEN_REGEX must compile")
});

/// Values substituted for the template tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValues {
    pub namespace: String,
    pub item_name: String,
    pub migration_id: String,
}

impl TokenValues {
    /// Build token values, taking the migration id from `now`.
    pub fn new(namespace: String, item_name: String, now: &DateTime<Local>) -> Self {
        Self {
            namespace,
            item_name,
            migration_id: migration_id(now),
        }
    }
}

/// Replace every token occurrence in `content`.
///
/// Substitution is a single pass, so a value that itself looks like a token
/// is inserted verbatim.
pub fn replace_tokens(content: &str, values: &TokenValues) -> String {
    TOKEN_REGEX
        .replace_all(content, |caps: &Captures| match &caps[0] {
            NAMESPACE_TOKEN => values.namespace.clone(),
            ITEM_NAME_TOKEN => values.item_name.clone(),
            _ => values.migration_id.clone(),
        })
        .into_owned()
}

/// Format a migration id (`yyyyMMddHHmm`).
pub fn migration_id(now: &DateTime<Local>) -> String {
    now.format(MIGRATION_ID_FORMAT).to_string()
}

/// Compose a namespace from the project root namespace and the cleaned
/// relative folder namespace.
pub fn build_namespace(root_namespace: &str, relative: Option<&str>) -> String {
    let mut ns = if root_namespace.is_empty() {
        DEFAULT_NAMESPACE.to_string()
    } else {
        root_namespace.to_string()
    };

    if let Some(rel) = relative.filter(|r| !r.is_empty()) {
        ns.push('.');
        ns.push_str(rel);
    }

    ns
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 42).unwrap()
    }

    fn values() -> TokenValues {
        TokenValues::new("Acme.Models".into(), "Order".into(), &fixed_time())
    }

    #[test]
    fn migration_id_is_minute_precision() {
        assert_eq!(migration_id(&fixed_time()), "202403070905");
    }

    #[test]
    fn migration_id_is_twelve_digits() {
        let id = migration_id(&Local::now());
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn replaces_all_tokens() {
        let out = replace_tokens(
            "namespace {namespace}; class {itemname} {} // {migrationid} {itemname}",
            &values(),
        );
        assert_eq!(
            out,
            "namespace Acme.Models; class Order {} // 202403070905 Order"
        );
    }

    #[test]
    fn token_constants_drive_substitution() {
        let template = format!("{}|{}|{}", NAMESPACE_TOKEN, ITEM_NAME_TOKEN, MIGRATION_ID_TOKEN);
        assert_eq!(
            replace_tokens(&template, &values()),
            "Acme.Models|Order|202403070905"
        );
    }

    #[test]
    fn leaves_unknown_braces() {
        let out = replace_tokens("{name} {ItemName} {{itemname}}", &values());
        assert_eq!(out, "{name} {ItemName} {Order}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let tricky = TokenValues {
            namespace: "{itemname}".into(),
            item_name: "X".into(),
            migration_id: "1".into(),
        };
        assert_eq!(
            replace_tokens("{namespace}/{itemname}", &tricky),
            "{itemname}/X"
        );
    }

    #[test]
    fn content_without_tokens_is_unchanged() {
        assert_eq!(replace_tokens("plain text", &values()), "plain text");
        assert_eq!(replace_tokens("", &values()), "");
    }

    #[test]
    fn namespace_falls_back_to_default() {
        assert_eq!(build_namespace("", None), "MyNamespace");
        assert_eq!(build_namespace("", Some("Models")), "MyNamespace.Models");
    }

    #[test]
    fn namespace_appends_relative() {
        assert_eq!(build_namespace("Acme", Some("Models")), "Acme.Models");
        assert_eq!(build_namespace("Acme", Some("")), "Acme");
        assert_eq!(build_namespace("Acme", None), "Acme");
    }
}
