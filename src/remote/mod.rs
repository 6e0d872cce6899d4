//! Remote template sources.
//!
//! This module provides:
//! - [`ContentSource`] - listing and raw-content calls against a remote tree
//! - [`GitHubSource`] - the HTTP implementation for `github/gitignore`
//! - [`MemorySource`] - an in-memory implementation for tests
//! - [`Probe`] - fetch one missing template from a few candidate paths
//! - [`Mirror`] - copy whole tiers into the local store

pub mod github;
pub mod memory;
pub mod mirror;
pub mod probe;
pub mod source;

pub use github::{GitHubSource, DEFAULT_API_URL, DEFAULT_RAW_URL};
pub use memory::MemorySource;
pub use mirror::{Mirror, MirrorEvent, MirrorFailure, MirrorReport, DEFAULT_DOWNLOAD_DELAY};
pub use probe::{Probe, ProbeHit};
pub use source::{ContentSource, EntryKind, RemoteEntry, Tier};
