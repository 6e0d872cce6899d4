//! The in-memory template registry.
//!
//! Built once per session by the [`TreeLoader`](super::TreeLoader) and
//! read-only afterwards.
//!
//! # Lookup Order
//!
//! 1. Exact qualified name
//! 2. Case-insensitive match through a lowercase index; when several keys
//!    differ only by case the lexicographically first one wins

use std::collections::{BTreeMap, HashMap};

use super::name::{self, DEFAULT_GROUP};

/// Qualified name → template content.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, String>,
    /// Lowercased name → sorted original keys.
    folded: HashMap<String, Vec<String>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from (name, content) pairs. Later pairs win.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut folded: HashMap<String, Vec<String>> = HashMap::new();
        for key in entries.keys() {
            folded
                .entry(key.to_lowercase())
                .or_default()
                .push(key.clone());
        }
        for keys in folded.values_mut() {
            keys.sort();
        }

        Self { entries, folded }
    }

    /// Get a template's content by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.resolve_name(name)?;
        self.entries.get(key).map(String::as_str)
    }

    /// The stored key that `get(name)` reads from.
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.entries.get_key_value(name) {
            return Some(key.as_str());
        }

        self.folded
            .get(&name.to_lowercase())
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// All keys equal to `name` ignoring case, sorted.
    pub fn case_variants(&self, name: &str) -> Vec<&str> {
        self.folded
            .get(&name.to_lowercase())
            .map(|keys| keys.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check if a template exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.resolve_name(name).is_some()
    }

    /// All qualified names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names grouped by category prefix, with bare names under `Main`.
    pub fn grouped(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for name in self.names() {
            let (prefix, base) = name::split(name);
            groups
                .entry(prefix.unwrap_or(DEFAULT_GROUP))
                .or_default()
                .push(base);
        }

        groups
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
