//! Template registry.
//!
//! This module turns the on-disk template store into an in-memory lookup
//! table:
//! - [`name`] - qualified names (`Go`, `Global/Vim`, `community/JS/Node`)
//! - [`alias`] - folding pointer templates into their targets
//! - [`loader`] - recursive directory walk producing a [`Registry`]
//! - [`resolver`] - exact and case-insensitive lookup
//!
//! # Example
//!
//! ```
//! use gitignore_cli::registry::Registry;
//!
//! let registry = Registry::from_entries([("Go", "/vendor\n"), ("Global/Vim", "*.swp\n")]);
//!
//! assert_eq!(registry.get("go"), Some("/vendor\n"));
//! assert_eq!(registry.grouped()["Global"], vec!["Vim"]);
//! ```

pub mod alias;
pub mod loader;
pub mod name;
pub mod resolver;

// Re-exports
pub use alias::{alias_target, resolve_alias};
pub use loader::{LoadReport, SkippedEntry, TreeLoader};
pub use name::DEFAULT_GROUP;
pub use resolver::Registry;
