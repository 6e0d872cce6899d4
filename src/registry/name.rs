//! Qualified template names.
//!
//! A qualified name is either a bare name (`Go`) or a `/`-joined path whose
//! leading segments are category directories (`Global/JetBrains`,
//! `community/JavaScript/Node`).

use crate::error::{GitignoreError, Result};

/// Group used for names without a category prefix.
pub const DEFAULT_GROUP: &str = "Main";

/// Separator between category segments and the base name.
pub const SEPARATOR: char = '/';

/// Split a qualified name into its category prefix and base name.
///
/// ```
/// use gitignore_cli::registry::name::split;
///
/// assert_eq!(split("Go"), (None, "Go"));
/// assert_eq!(split("Global/Vim"), (Some("Global"), "Vim"));
/// assert_eq!(split("community/JS/Node"), (Some("community/JS"), "Node"));
/// ```
pub fn split(name: &str) -> (Option<&str>, &str) {
    match name.rfind(SEPARATOR) {
        Some(idx) => (Some(&name[..idx]), &name[idx + 1..]),
        None => (None, name),
    }
}

/// Category prefix of a qualified name, if any.
pub fn category(name: &str) -> Option<&str> {
    split(name).0
}

/// Last segment of a qualified name.
pub fn base_name(name: &str) -> &str {
    split(name).1
}

/// Join an optional category prefix and a base name.
pub fn join(prefix: Option<&str>, base: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}{}{}", prefix, SEPARATOR, base),
        _ => base.to_string(),
    }
}

/// Whether the name carries a category prefix.
pub fn is_qualified(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Check that a name maps to a path strictly inside the store.
///
/// Rejects empty segments, `.`/`..` and backslashes.
pub fn validate(name: &str) -> Result<()> {
    let invalid = |reason: &str| GitignoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('\\') {
        return Err(invalid("backslashes are not allowed"));
    }

    for segment in name.split(SEPARATOR) {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative path segment")),
            _ => {}
        }
    }

    Ok(())
}
