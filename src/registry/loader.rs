//! Building a [`Registry`] from a template store directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::alias;
use super::name;
use super::resolver::Registry;
use crate::error::{GitignoreError, Result};

/// A path the loader could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Path that was skipped.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Diagnostics from one load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Unreadable files and directories.
    pub skipped: Vec<SkippedEntry>,
    /// Aliases whose target was not found; their marker text is stored as-is.
    pub unresolved_aliases: Vec<String>,
}

impl LoadReport {
    /// Whether the load finished without any diagnostics.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.unresolved_aliases.is_empty()
    }
}

/// Loads templates by walking a directory tree.
///
/// Every file ending in the suffix becomes an entry named after the category
/// directories leading to it plus its base name. Aliases are resolved after
/// the whole tree has been read.
#[derive(Debug, Clone)]
pub struct TreeLoader {
    suffix: String,
}

impl TreeLoader {
    /// Create a loader for files ending in `suffix` (e.g. `.gitignore`).
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Get the template suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Load every template below `root`.
    ///
    /// Only failing to read `root` itself is an error.
    pub fn load(&self, root: &Path) -> Result<(Registry, LoadReport)> {
        let listing = fs::read_dir(root).map_err(|e| GitignoreError::directory(root, &e))?;

        let mut raw = HashMap::new();
        let mut report = LoadReport::default();
        self.walk_entries(listing, root, None, &mut raw, &mut report);

        tracing::debug!(
            "Read {} template files from {} ({} skipped)",
            raw.len(),
            root.display(),
            report.skipped.len()
        );

        let resolution = alias::resolve_all(raw, &self.suffix);
        report.unresolved_aliases = resolution.unresolved;

        Ok((Registry::from_entries(resolution.entries), report))
    }

    fn walk(
        &self,
        dir: &Path,
        prefix: Option<&str>,
        raw: &mut HashMap<String, String>,
        report: &mut LoadReport,
    ) {
        match fs::read_dir(dir) {
            Ok(listing) => self.walk_entries(listing, dir, prefix, raw, report),
            Err(e) => skip(report, dir, e.to_string()),
        }
    }

    fn walk_entries(
        &self,
        listing: fs::ReadDir,
        dir: &Path,
        prefix: Option<&str>,
        raw: &mut HashMap<String, String>,
        report: &mut LoadReport,
    ) {
        let mut entries = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => skip(report, dir, e.to_string()),
            }
        }
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                skip(report, &path, "file name is not valid UTF-8".to_string());
                continue;
            };

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    skip(report, &path, e.to_string());
                    continue;
                }
            };

            // Symlinked directories are never walked.
            if file_type.is_symlink() && path.is_dir() {
                skip(report, &path, "symbolic link to a directory".to_string());
                continue;
            }

            if file_type.is_dir() {
                let child_prefix = name::join(prefix, &file_name);
                self.walk(&path, Some(child_prefix.as_str()), raw, report);
                continue;
            }

            let Some(base) = file_name.strip_suffix(self.suffix.as_str()) else {
                continue;
            };
            if base.is_empty() {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) => {
                    raw.insert(name::join(prefix, base), content);
                }
                Err(e) => skip(report, &path, e.to_string()),
            }
        }
    }
}

fn skip(report: &mut LoadReport, path: &Path, reason: String) {
    tracing::warn!("Skipping {}: {}", path.display(), reason);
    report.skipped.push(SkippedEntry {
        path: path.to_path_buf(),
        reason,
    });
}
