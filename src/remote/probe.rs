//! Single-name probe.
//!
//! When a name is missing locally, the probe tries a short ordered list of
//! remote paths and keeps the first hit:
//!
//! 1. `<name><suffix>` at the root
//! 2. `Global/<name><suffix>`
//! 3. `community/<sub>/<name><suffix>` for each community sub-category
//!
//! Sub-categories come from one listing call; if it fails the community
//! candidates are simply left out.

use std::path::PathBuf;

use super::source::{ContentSource, EntryKind, Tier};
use crate::error::{GitignoreError, Result};
use crate::registry::name;
use crate::store::Store;

/// A template found by the probe and persisted to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHit {
    /// Qualified name the template was found under.
    pub name: String,
    /// Template content.
    pub content: String,
    /// Where it was written in the store.
    pub path: PathBuf,
}

/// Probes a remote source for one template at a time.
pub struct Probe<'a> {
    source: &'a dyn ContentSource,
    store: &'a Store,
}

impl<'a> Probe<'a> {
    /// Create a probe that persists hits into `store`.
    pub fn new(source: &'a dyn ContentSource, store: &'a Store) -> Self {
        Self { source, store }
    }

    /// Ordered qualified names to try for `name`.
    ///
    /// A name that already has a category prefix is only tried as-is.
    pub fn candidates(&self, requested: &str) -> Result<Vec<String>> {
        name::validate(requested)?;

        if name::is_qualified(requested) {
            return Ok(vec![requested.to_string()]);
        }

        let mut candidates = vec![
            requested.to_string(),
            name::join(Some(Tier::Global.path()), requested),
        ];

        let community = Tier::Community.path();
        match self.source.list_category(community) {
            Ok(entries) => candidates.extend(
                entries
                    .into_iter()
                    .filter(|e| e.kind == EntryKind::Dir)
                    .map(|e| format!("{}/{}/{}", community, e.name, requested)),
            ),
            Err(e) => tracing::warn!("Skipping community candidates: {}", e),
        }

        Ok(candidates)
    }

    /// Fetch `name` from the first candidate that answers.
    ///
    /// The hit is written to the store at the same relative path. Fails with
    /// [`GitignoreError::NotFound`] when every candidate fails.
    pub fn fetch(&self, requested: &str) -> Result<ProbeHit> {
        for candidate in self.candidates(requested)? {
            let remote_path = format!("{}{}", candidate, self.store.suffix());
            let location = self.source.content_location(&remote_path);

            match self.source.fetch_content(&location) {
                Ok(content) => {
                    let path = self.store.write(&candidate, &content)?;
                    tracing::info!("Fetched {} from {}", candidate, location);
                    return Ok(ProbeHit {
                        name: candidate,
                        content,
                        path,
                    });
                }
                Err(e) => tracing::debug!("Candidate {} failed: {}", candidate, e),
            }
        }

        Err(GitignoreError::NotFound {
            name: requested.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MemorySource;
    use std::fs;
    use tempfile::TempDir;

    fn remote() -> MemorySource {
        MemorySource::new()
            .with_file("Go.gitignore", "root go")
            .with_file("Global/Vim.gitignore", "vim")
            .with_file("community/JS/Vue.gitignore", "vue")
            .with_file("community/Py/Name.gitignore", "py name")
    }

    fn store(temp: &TempDir) -> Store {
        Store::open(temp.path().join("store"), ".gitignore").unwrap()
    }

    #[test]
    fn candidate_order() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let candidates = Probe::new(&source, &store).candidates("Name").unwrap();

        assert_eq!(
            candidates,
            vec!["Name", "Global/Name", "community/JS/Name", "community/Py/Name"]
        );
    }

    #[test]
    fn qualified_name_is_probed_as_is() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let candidates = Probe::new(&source, &store).candidates("Global/Vim").unwrap();

        assert_eq!(candidates, vec!["Global/Vim"]);
    }

    #[test]
    fn community_listing_failure_degrades_candidates() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote().with_failing_listing("community");

        let candidates = Probe::new(&source, &store).candidates("Name").unwrap();

        assert_eq!(candidates, vec!["Name", "Global/Name"]);
    }

    #[test]
    fn invalid_name_is_rejected_before_any_request() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let err = Probe::new(&source, &store).fetch("../Go").unwrap_err();

        assert!(matches!(err, GitignoreError::InvalidName { .. }));
        assert!(source.fetched().is_empty());
    }

    #[test]
    fn root_hit_wins() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let hit = Probe::new(&source, &store).fetch("Go").unwrap();

        assert_eq!(hit.name, "Go");
        assert_eq!(hit.content, "root go");
        assert_eq!(source.fetched(), vec!["Go.gitignore".to_string()]);
    }

    #[test]
    fn community_hit_is_persisted_at_same_path() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let hit = Probe::new(&source, &store).fetch("Name").unwrap();

        assert_eq!(hit.name, "community/Py/Name");
        assert_eq!(hit.content, "py name");
        let expected = store.root().join("community").join("Py").join("Name.gitignore");
        assert_eq!(hit.path, expected);
        assert_eq!(fs::read_to_string(expected).unwrap(), "py name");
        assert_eq!(
            source.fetched(),
            vec![
                "Name.gitignore".to_string(),
                "Global/Name.gitignore".to_string(),
                "community/JS/Name.gitignore".to_string(),
                "community/Py/Name.gitignore".to_string(),
            ]
        );
    }

    #[test]
    fn exhausted_candidates_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let source = remote();

        let err = Probe::new(&source, &store).fetch("Cobol").unwrap_err();

        assert!(err.is_not_found());
        assert!(store.is_empty().unwrap());
    }
}
