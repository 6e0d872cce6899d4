//! The remote content source interface.

use serde::Deserialize;

use crate::error::Result;

/// Kind of a remote listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A sub-directory.
    Dir,
    /// Symlinks, submodules and anything else; never mirrored.
    #[serde(other)]
    Other,
}

/// One entry of a remote directory listing.
///
/// Field names follow the GitHub contents API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    /// File or directory name.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Where the raw content can be fetched (files only).
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RemoteEntry {
    /// A file entry.
    pub fn file(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            download_url: Some(download_url.into()),
        }
    }

    /// A directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            download_url: None,
        }
    }
}

/// A remote tree of template categories.
pub trait ContentSource {
    /// List a category; `""` is the root.
    ///
    /// Fails with [`GitignoreError::Listing`](crate::GitignoreError::Listing).
    fn list_category(&self, category: &str) -> Result<Vec<RemoteEntry>>;

    /// Fetch raw content from a location.
    ///
    /// Fails with [`GitignoreError::Fetch`](crate::GitignoreError::Fetch).
    fn fetch_content(&self, location: &str) -> Result<String>;

    /// The raw-content location of a path relative to the remote root.
    fn content_location(&self, path: &str) -> String;
}

/// Top-level remote categories, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Templates at the root of the remote tree.
    Root,
    /// Editor and OS templates.
    Global,
    /// Community templates, one directory per sub-category.
    Community,
}

impl Tier {
    /// All tiers in cascade order.
    pub const ALL: [Tier; 3] = [Tier::Root, Tier::Global, Tier::Community];

    /// Remote path of the tier; empty for the root.
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Global => "Global",
            Self::Community => "community",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Global => "Global",
            Self::Community => "community",
        }
    }

    /// Whether directories inside the tier are sub-categories to descend into.
    pub fn has_subcategories(self) -> bool {
        matches!(self, Self::Community)
    }
}
