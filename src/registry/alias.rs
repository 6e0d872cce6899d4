//! Alias (reference) templates.
//!
//! Some upstream templates are pure pointers: the whole file is the storage
//! name of another template, e.g. `Fortran.gitignore` containing just
//! `C++.gitignore`. These are folded into the target's content so lookups
//! never see the marker.

use std::collections::{HashMap, HashSet};

/// Return the referenced qualified name if `content` is an alias marker.
///
/// A marker is a single line (after trimming) ending in `suffix`.
///
/// ```
/// use gitignore_cli::registry::alias::alias_target;
///
/// assert_eq!(alias_target("C++.gitignore\n", ".gitignore"), Some("C++"));
/// assert_eq!(alias_target("*.o\n*.a\n", ".gitignore"), None);
/// ```
pub fn alias_target<'a>(content: &'a str, suffix: &str) -> Option<&'a str> {
    let trimmed = content.trim();
    if trimmed.contains('\n') {
        return None;
    }
    trimmed.strip_suffix(suffix)
}

/// Resolve one alias against the entries available right now.
///
/// Returns the target's content on a hit. On a miss, or if `content` is not
/// a marker, the trimmed marker or the original content is returned. This
/// is the single-step form: a target that has not been loaded yet is a
/// miss.
pub fn resolve_alias<'a, F>(content: &str, suffix: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    match alias_target(content, suffix) {
        Some(target) => match lookup(target) {
            Some(resolved) => resolved.to_string(),
            None => content.trim().to_string(),
        },
        None => content.to_string(),
    }
}

/// Outcome of resolving every entry of a complete raw map.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    pub entries: HashMap<String, String>,
    pub unresolved: Vec<String>,
}

/// Resolve every alias in `raw` against the complete set.
///
/// Chains are followed to the first non-alias entry. Missing targets and
/// cycles leave the trimmed marker in place and are reported.
pub(crate) fn resolve_all(raw: HashMap<String, String>, suffix: &str) -> Resolution {
    let mut resolution = Resolution::default();

    for (name, content) in &raw {
        let resolved = match alias_target(content, suffix) {
            None => content.clone(),
            Some(_) => match follow_chain(name, &raw, suffix) {
                Some(target_content) => target_content.to_string(),
                None => {
                    tracing::debug!("Alias '{}' has no loadable target", name);
                    resolution.unresolved.push(name.clone());
                    content.trim().to_string()
                }
            },
        };
        resolution.entries.insert(name.clone(), resolved);
    }

    resolution.unresolved.sort();
    resolution
}

fn follow_chain<'a>(
    start: &str,
    raw: &'a HashMap<String, String>,
    suffix: &str,
) -> Option<&'a str> {
    let mut visited = HashSet::new();
    let mut current = start;

    loop {
        if !visited.insert(current) {
            return None;
        }
        let content = raw.get(current)?;
        match alias_target(content, suffix) {
            Some(target) => current = target,
            None => return Some(content.as_str()),
        }
    }
}
