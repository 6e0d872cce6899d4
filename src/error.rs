//! Error types for template store operations.
//!
//! This module defines [`GitignoreError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Local store corruption never surfaces here; the loader records it in a
//!   [`LoadReport`](crate::registry::LoadReport) instead
//! - Per-item remote failures are absorbed by the caller (next candidate,
//!   next file) and only escalate as [`GitignoreError::NotFound`]
//! - Use `anyhow::Error` (via `GitignoreError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template resolution and caching.
#[derive(Debug, Error)]
pub enum GitignoreError {
    /// The template store root could not be determined or created.
    #[error("Template store unavailable at {path}: {message}")]
    Directory { path: PathBuf, message: String },

    /// A remote category listing failed.
    #[error("Failed to list remote category '{category}': {message}")]
    Listing { category: String, message: String },

    /// A single remote content fetch failed.
    #[error("Failed to fetch {location}: {message}")]
    Fetch { location: String, message: String },

    /// No local or remote template matches the requested name.
    #[error("No template found for '{name}'")]
    NotFound { name: String },

    /// The name cannot be mapped to a path inside the store.
    #[error("Invalid template name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GitignoreError {
    /// Build a [`GitignoreError::Directory`] from an IO failure on `path`.
    pub fn directory(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Directory {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether this error means "nothing was found anywhere".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for template store operations.
pub type Result<T> = std::result::Result<T, GitignoreError>;
