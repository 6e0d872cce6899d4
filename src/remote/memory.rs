//! In-memory content source.
//!
//! `MemorySource` implements [`ContentSource`] over a map of remote paths and
//! records every fetch, which makes probe and mirror behavior easy to assert
//! without a network.
//!
//! # Example
//!
//! ```
//! use gitignore_cli::remote::{ContentSource, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with_file("Go.gitignore", "/vendor\n")
//!     .with_file("community/JS/Node.gitignore", "node_modules/\n");
//!
//! let names: Vec<_> = source
//!     .list_category("community")
//!     .unwrap()
//!     .into_iter()
//!     .map(|e| e.name)
//!     .collect();
//! assert_eq!(names, vec!["JS"]);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::source::{ContentSource, RemoteEntry};
use crate::error::{GitignoreError, Result};

const SCHEME: &str = "memory://";

/// A remote tree held in memory.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
    failing_listings: HashSet<String>,
    failing_files: HashSet<String>,
    fetches: RefCell<Vec<String>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a path relative to the remote root.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Make listing a category fail.
    pub fn with_failing_listing(mut self, category: &str) -> Self {
        self.failing_listings.insert(category.to_string());
        self
    }

    /// Make fetching a file fail even though it is listed.
    pub fn with_failing_file(mut self, path: &str) -> Self {
        self.failing_files.insert(path.to_string());
        self
    }

    /// Paths fetched so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }
}

impl ContentSource for MemorySource {
    fn list_category(&self, category: &str) -> Result<Vec<RemoteEntry>> {
        if self.failing_listings.contains(category) {
            return Err(GitignoreError::Listing {
                category: category.to_string(),
                message: "listing unavailable".to_string(),
            });
        }

        let prefix = if category.is_empty() {
            String::new()
        } else {
            format!("{}/", category)
        };

        let mut files = Vec::new();
        let mut dirs = BTreeSet::new();
        let mut found = category.is_empty();

        for path in self.files.keys() {
            let Some(rest) = path.strip_prefix(prefix.as_str()) else {
                continue;
            };
            found = true;
            match rest.split_once('/') {
                Some((dir, _)) => {
                    dirs.insert(dir.to_string());
                }
                None => files.push(RemoteEntry::file(rest, self.content_location(path))),
            }
        }

        if !found {
            return Err(GitignoreError::Listing {
                category: category.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            });
        }

        files.extend(dirs.into_iter().map(RemoteEntry::dir));
        Ok(files)
    }

    fn fetch_content(&self, location: &str) -> Result<String> {
        let path = location.strip_prefix(SCHEME).unwrap_or(location);
        self.fetches.borrow_mut().push(path.to_string());

        if self.failing_files.contains(path) {
            return Err(GitignoreError::Fetch {
                location: location.to_string(),
                message: "connection reset".to_string(),
            });
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| GitignoreError::Fetch {
                location: location.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
    }

    fn content_location(&self, path: &str) -> String {
        format!("{}{}", SCHEME, path)
    }
}
