//! gitignore-cli - Create .gitignore files from the github/gitignore templates.
//!
//! Templates live in a local store (`~/.gitignore-cli` by default) that mirrors
//! the layout of the upstream repository. A lookup reads the store; a miss
//! probes the remote for the one template and caches it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template names, aliases, loading and lookup
//! - [`remote`] - Remote sources, the single-name probe and the bulk mirror
//! - [`session`] - Per-invocation lookup and refresh
//! - [`store`] - The on-disk template store
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use gitignore_cli::remote::MemorySource;
//! use gitignore_cli::session::Session;
//! use gitignore_cli::store::Store;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::open(dir.path().join("store"), ".gitignore").unwrap();
//! let remote = MemorySource::new().with_file("Global/Vim.gitignore", "*.swp\n");
//!
//! let mut session = Session::load(store).unwrap();
//! let vim = session.resolve("Vim", Some(&remote)).unwrap();
//!
//! assert_eq!(vim.name, "Global/Vim");
//! assert!(session.registry().contains("global/vim"));
//! ```
//!
//! For the HTTP source, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod remote;
pub mod session;
pub mod store;
pub mod ui;

pub use error::{GitignoreError, Result};
