//! Full-tier cascade and bulk mirror.
//!
//! Mirrors remote tiers into the store: one listing per category, one fetch
//! per template file, and a short pause after each download to stay under
//! the remote's rate limits.

use std::thread;
use std::time::Duration;

use super::source::{ContentSource, EntryKind, Tier};
use crate::error::{GitignoreError, Result};
use crate::registry::name;
use crate::store::{Confirmation, Store};

/// Default pause after each successful download.
pub const DEFAULT_DOWNLOAD_DELAY: Duration = Duration::from_millis(100);

/// Progress notifications emitted while mirroring.
#[derive(Debug)]
pub enum MirrorEvent<'e> {
    /// A category listing is about to be requested.
    Listing { category: &'e str },
    /// A template was written to the store.
    Downloaded { name: &'e str },
    /// A file or sub-category was skipped.
    Skipped { target: &'e str, error: &'e GitignoreError },
}

/// Something the mirror skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorFailure {
    /// Qualified name or sub-category.
    pub target: String,
    /// What went wrong.
    pub message: String,
}

/// Result of a mirror run.
#[derive(Debug, Clone, Default)]
pub struct MirrorReport {
    /// Qualified names written to the store, in download order.
    pub downloaded: Vec<String>,
    /// Files and sub-categories that were skipped.
    pub failures: Vec<MirrorFailure>,
}

impl MirrorReport {
    fn merge(&mut self, other: MirrorReport) {
        self.downloaded.extend(other.downloaded);
        self.failures.extend(other.failures);
    }
}

type Observer<'a> = Box<dyn FnMut(&MirrorEvent<'_>) + 'a>;

/// Copies remote tiers into a [`Store`].
pub struct Mirror<'a> {
    source: &'a dyn ContentSource,
    store: &'a Store,
    delay: Duration,
    observer: Option<Observer<'a>>,
}

impl<'a> Mirror<'a> {
    /// Create a mirror with the default download delay.
    pub fn new(source: &'a dyn ContentSource, store: &'a Store) -> Self {
        Self {
            source,
            store,
            delay: DEFAULT_DOWNLOAD_DELAY,
            observer: None,
        }
    }

    /// Set the pause after each download.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Receive progress events.
    pub fn on_event(mut self, observer: impl FnMut(&MirrorEvent<'_>) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Get the target store.
    pub fn store(&self) -> &Store {
        self.store
    }

    /// Mirror root, `Global` and `community`, in that order.
    ///
    /// A failed tier listing aborts the run.
    pub fn mirror_all(&mut self) -> Result<MirrorReport> {
        let mut report = MirrorReport::default();
        for tier in Tier::ALL {
            report.merge(self.mirror_tier(tier)?);
        }
        Ok(report)
    }

    /// Mirror a single tier.
    pub fn mirror_tier(&mut self, tier: Tier) -> Result<MirrorReport> {
        tracing::debug!("Mirroring {} tier", tier.label());
        let mut report = MirrorReport::default();
        self.mirror_category(tier.path(), tier.has_subcategories(), &mut report)?;
        Ok(report)
    }

    /// Reset the store and mirror every tier into it.
    ///
    /// Returns `None` without touching anything unless confirmed.
    pub fn refresh(&mut self, confirmation: Confirmation) -> Result<Option<MirrorReport>> {
        if !self.store.reset(confirmation)? {
            return Ok(None);
        }
        self.mirror_all().map(Some)
    }

    fn mirror_category(
        &mut self,
        category: &str,
        descend: bool,
        report: &mut MirrorReport,
    ) -> Result<()> {
        self.emit(&MirrorEvent::Listing { category });
        let entries = self.source.list_category(category)?;
        let prefix = (!category.is_empty()).then_some(category);

        for entry in entries {
            match entry.kind {
                EntryKind::File => {
                    let Some(base) = entry.name.strip_suffix(self.store.suffix()) else {
                        continue;
                    };
                    let qualified = name::join(prefix, base);
                    let location = entry.download_url.clone().unwrap_or_else(|| {
                        self.source
                            .content_location(&name::join(prefix, &entry.name))
                    });
                    self.download(&qualified, &location, report)?;
                }
                EntryKind::Dir if descend => {
                    let sub = name::join(prefix, &entry.name);
                    if let Err(e) = self.mirror_category(&sub, false, report) {
                        tracing::warn!("Failed to mirror {}: {}", sub, e);
                        self.record(report, &sub, e);
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn download(&mut self, qualified: &str, location: &str, report: &mut MirrorReport) -> Result<()> {
        let content = match self.source.fetch_content(location) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", qualified, e);
                self.record(report, qualified, e);
                return Ok(());
            }
        };

        match self.store.write(qualified, &content) {
            Ok(_) => {}
            Err(e @ GitignoreError::InvalidName { .. }) => {
                tracing::warn!("Skipping {}: {}", qualified, e);
                self.record(report, qualified, e);
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        self.emit(&MirrorEvent::Downloaded { name: qualified });
        report.downloaded.push(qualified.to_string());

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    fn record(&mut self, report: &mut MirrorReport, target: &str, error: GitignoreError) {
        self.emit(&MirrorEvent::Skipped {
            target,
            error: &error,
        });
        report.failures.push(MirrorFailure {
            target: target.to_string(),
            message: error.to_string(),
        });
    }

    fn emit(&mut self, event: &MirrorEvent<'_>) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}
