//! Per-invocation template session.
//!
//! A [`Session`] owns the [`Store`] handle and the [`Registry`] built from it.
//! Lookups hit the registry first; a miss falls through to the remote
//! [`Probe`], whose hit is persisted and folded back into the registry.
//!
//! ```text
//! Uninitialized -> Loading -> Ready
//! Ready -> Fetching -> Ready (updated)
//! ```

mod output;

pub use output::write_template;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GitignoreError, Result};
use crate::registry::{LoadReport, Registry};
use crate::remote::{ContentSource, Mirror, MirrorReport, Probe};
use crate::store::{Confirmation, Store};

/// Where a resolved template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Already present in the local store.
    Store,
    /// Fetched just now and written to `path`.
    Remote { path: PathBuf },
}

/// A template answered by [`Session::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Qualified name as stored.
    pub name: String,
    /// Template content, aliases already followed.
    pub content: String,
    /// Local or remote.
    pub origin: Origin,
}

/// Store plus the registry loaded from it.
#[derive(Debug)]
pub struct Session {
    store: Store,
    registry: Registry,
    report: LoadReport,
}

impl Session {
    /// Load the registry from `store`.
    pub fn load(store: Store) -> Result<Self> {
        store.ensure_dir()?;
        let (registry, report) = store.load()?;
        tracing::debug!(
            "Loaded {} templates from {}",
            registry.len(),
            store.root().display()
        );
        Ok(Self {
            store,
            registry,
            report,
        })
    }

    /// Mirror every tier first when the store is empty, then load.
    ///
    /// A failed bootstrap mirror is logged and the session still loads
    /// whatever made it into the store.
    pub fn bootstrap(store: Store, source: &dyn ContentSource, delay: Duration) -> Result<Self> {
        if store.is_empty()? {
            tracing::info!("Template store is empty, mirroring all tiers");
            store.ensure_dir()?;
            let outcome = Mirror::new(source, &store).with_delay(delay).mirror_all();
            if let Err(e) = outcome {
                tracing::warn!("Initial mirror failed: {}", e);
            }
        }
        Self::load(store)
    }

    /// Get the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// What the last load skipped.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Local-only lookup.
    pub fn lookup(&self, name: &str) -> Option<Resolved> {
        let key = self.registry.resolve_name(name)?;
        let content = self.registry.get(key)?;
        Some(Resolved {
            name: key.to_string(),
            content: content.to_string(),
            origin: Origin::Store,
        })
    }

    /// Resolve `name` locally, then through `source` if one is given.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the store misses and no remote candidate
    /// answers, or immediately when `source` is `None`.
    pub fn resolve(&mut self, name: &str, source: Option<&dyn ContentSource>) -> Result<Resolved> {
        if let Some(found) = self.lookup(name) {
            return Ok(found);
        }

        let Some(source) = source else {
            return Err(GitignoreError::NotFound {
                name: name.to_string(),
            });
        };

        let hit = Probe::new(source, &self.store).fetch(name)?;
        self.reload()?;

        let content = self
            .registry
            .get(&hit.name)
            .map(str::to_string)
            .unwrap_or(hit.content);

        Ok(Resolved {
            name: hit.name,
            content,
            origin: Origin::Remote { path: hit.path },
        })
    }

    /// Rebuild the registry from the store.
    pub fn reload(&mut self) -> Result<()> {
        let (registry, report) = self.store.load()?;
        self.registry = registry;
        self.report = report;
        Ok(())
    }
}

/// Purge `store` and mirror every tier into it.
///
/// Returns `None` without touching the store unless `confirmation` is
/// granted.
pub fn refresh(
    store: &Store,
    source: &dyn ContentSource,
    delay: Duration,
    confirmation: Confirmation,
) -> Result<Option<MirrorReport>> {
    Mirror::new(source, store)
        .with_delay(delay)
        .refresh(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MemorySource;
    use std::fs;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> Store {
        Store::new(temp.path().join("store"), ".gitignore")
    }

    #[test]
    fn load_creates_missing_store() {
        let temp = TempDir::new().unwrap();
        let session = Session::load(store(&temp)).unwrap();

        assert!(session.store().root().is_dir());
        assert!(session.registry().is_empty());
        assert!(session.report().is_clean());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Python", "*.pyc").unwrap();

        let session = Session::load(store).unwrap();
        let found = session.lookup("python").unwrap();

        assert_eq!(found.name, "Python");
        assert_eq!(found.content, "*.pyc");
        assert_eq!(found.origin, Origin::Store);
    }

    #[test]
    fn resolve_prefers_store_over_remote() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Go", "local go").unwrap();
        let source = MemorySource::new().with_file("Go.gitignore", "remote go");

        let mut session = Session::load(store).unwrap();
        let resolved = session.resolve("Go", Some(&source)).unwrap();

        assert_eq!(resolved.content, "local go");
        assert!(source.fetched().is_empty());
    }

    #[test]
    fn resolve_miss_fetches_and_updates_registry() {
        let temp = TempDir::new().unwrap();
        let source = MemorySource::new().with_file("Global/Vim.gitignore", "[._]*.swp");

        let mut session = Session::load(store(&temp)).unwrap();
        let resolved = session.resolve("Vim", Some(&source)).unwrap();

        assert_eq!(resolved.name, "Global/Vim");
        assert_eq!(resolved.content, "[._]*.swp");
        assert!(matches!(resolved.origin, Origin::Remote { .. }));
        assert!(session.registry().contains("Global/Vim"));

        // Second lookup is answered locally.
        let again = session.resolve("Global/Vim", None).unwrap();
        assert_eq!(again.origin, Origin::Store);
    }

    #[test]
    fn fetched_alias_is_followed() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Global/Emacs", "*~").unwrap();
        let source = MemorySource::new().with_file("Spacemacs.gitignore", "Global/Emacs.gitignore\n");

        let mut session = Session::load(store).unwrap();
        let resolved = session.resolve("Spacemacs", Some(&source)).unwrap();

        assert_eq!(resolved.content, "*~");
    }

    #[test]
    fn resolve_offline_miss_is_not_found() {
        let temp = TempDir::new().unwrap();
        let mut session = Session::load(store(&temp)).unwrap();

        let err = session.resolve("Cobol", None).unwrap_err();

        assert!(matches!(err, GitignoreError::NotFound { ref name } if name == "Cobol"));
    }

    #[test]
    fn bootstrap_mirrors_empty_store() {
        let temp = TempDir::new().unwrap();
        let source = MemorySource::new()
            .with_file("Go.gitignore", "go")
            .with_file("Global/Vim.gitignore", "vim");

        let session = Session::bootstrap(store(&temp), &source, Duration::ZERO).unwrap();

        assert_eq!(session.registry().names(), vec!["Global/Vim", "Go"]);
    }

    #[test]
    fn bootstrap_leaves_populated_store_alone() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Rust", "target/").unwrap();
        let source = MemorySource::new().with_file("Go.gitignore", "go");

        let session = Session::bootstrap(store, &source, Duration::ZERO).unwrap();

        assert_eq!(session.registry().names(), vec!["Rust"]);
        assert!(source.fetched().is_empty());
    }

    #[test]
    fn bootstrap_survives_failed_mirror() {
        let temp = TempDir::new().unwrap();
        let source = MemorySource::new().with_failing_listing("");

        let session = Session::bootstrap(store(&temp), &source, Duration::ZERO).unwrap();

        assert!(session.registry().is_empty());
    }

    #[test]
    fn refresh_requires_confirmation() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Old", "old").unwrap();
        let source = MemorySource::new().with_file("Go.gitignore", "go");

        let outcome = refresh(&store, &source, Duration::ZERO, Confirmation::Denied).unwrap();

        assert!(outcome.is_none());
        assert!(store.root().join("Old.gitignore").exists());
    }

    #[test]
    fn refresh_replaces_store_contents() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.ensure_dir().unwrap();
        store.write("Old", "old").unwrap();
        let source = MemorySource::new().with_file("Go.gitignore", "go");

        let report = refresh(&store, &source, Duration::ZERO, Confirmation::Granted)
            .unwrap()
            .unwrap();

        assert_eq!(report.downloaded, vec!["Go"]);
        assert!(!store.root().join("Old.gitignore").exists());
        assert_eq!(
            fs::read_to_string(store.root().join("Go.gitignore")).unwrap(),
            "go"
        );
    }
}
