//! Store directory handling.

use std::fs;
use std::path::{Path, PathBuf};

use super::confirm::Confirmation;
use crate::error::{GitignoreError, Result};
use crate::registry::{name, LoadReport, Registry, TreeLoader};

/// Handle on a template store directory.
#[derive(Debug, Clone)]
pub struct Store {
    /// Root directory of the store.
    root: PathBuf,
    /// File suffix of template files.
    suffix: String,
}

impl Store {
    /// Create a store handle without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    /// Open a store, creating the root directory if it is absent.
    pub fn open(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Result<Self> {
        let store = Self::new(root, suffix);
        store.ensure_dir()?;
        Ok(store)
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the template suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Ensure the store directory exists.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| GitignoreError::directory(&self.root, &e))
    }

    /// Path of the file backing a qualified name.
    pub fn path_for(&self, qualified: &str) -> Result<PathBuf> {
        name::validate(qualified)?;

        let (prefix, base) = name::split(qualified);
        let mut path = self.root.clone();
        if let Some(prefix) = prefix {
            path.extend(prefix.split(name::SEPARATOR));
        }
        path.push(format!("{}{}", base, self.suffix));
        Ok(path)
    }

    /// Write a template, creating category directories as needed.
    pub fn write(&self, qualified: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_for(qualified)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GitignoreError::directory(parent, &e))?;
        }
        fs::write(&path, content)?;

        tracing::debug!("Stored {} at {}", qualified, path.display());
        Ok(path)
    }

    /// Read a stored template's raw content, if present.
    pub fn read(&self, qualified: &str) -> Result<Option<String>> {
        let path = self.path_for(qualified)?;
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Whether the store directory is missing or has no entries.
    pub fn is_empty(&self) -> Result<bool> {
        match fs::read_dir(&self.root) {
            Ok(mut entries) => Ok(entries.next().is_none()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(GitignoreError::directory(&self.root, &e)),
        }
    }

    /// All template files in the store, relative to the root, sorted.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if self.root.is_dir() {
            self.collect_files(&self.root, &mut files)?;
        }
        files.sort();
        Ok(files)
    }

    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                self.collect_files(&path, files)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(self.suffix.as_str()))
            {
                if let Ok(relative) = path.strip_prefix(&self.root) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        Ok(())
    }

    /// Load the store into a [`Registry`].
    pub fn load(&self) -> Result<(Registry, LoadReport)> {
        TreeLoader::new(self.suffix.as_str()).load(&self.root)
    }

    /// Remove the whole store directory.
    ///
    /// Does nothing unless `confirmation` is granted. Returns whether
    /// anything was removed.
    pub fn purge(&self, confirmation: Confirmation) -> Result<bool> {
        if !confirmation.is_granted() {
            tracing::debug!("Purge of {} not confirmed", self.root.display());
            return Ok(false);
        }

        match fs::remove_dir_all(&self.root) {
            Ok(()) => {
                tracing::info!("Removed template store {}", self.root.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GitignoreError::directory(&self.root, &e)),
        }
    }

    /// Purge and recreate an empty store directory.
    ///
    /// Returns `false` without touching anything unless confirmed.
    pub fn reset(&self, confirmation: Confirmation) -> Result<bool> {
        if !confirmation.is_granted() {
            return Ok(false);
        }
        self.purge(confirmation)?;
        self.ensure_dir()?;
        Ok(true)
    }
}
