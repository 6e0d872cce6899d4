//! The on-disk template store.
//!
//! One file per template, with directories for category prefixes:
//!
//! ```text
//! ~/.gitignore-cli/
//! ├── Go.gitignore
//! ├── Global/
//! │   └── JetBrains.gitignore
//! └── community/
//!     └── JavaScript/
//!         └── Node.gitignore
//! ```

pub mod confirm;
pub mod tree;

pub use confirm::Confirmation;
pub use tree::Store;

use std::path::PathBuf;

use crate::error::{GitignoreError, Result};

/// Directory name of the store under the user's home directory.
pub const STORE_DIR_NAME: &str = ".gitignore-cli";

/// Default template suffix.
pub const DEFAULT_SUFFIX: &str = ".gitignore";

/// Get the default store directory (`~/.gitignore-cli`).
///
/// Does not create it; [`Store::open`] does.
pub fn default_store_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(STORE_DIR_NAME))
        .ok_or_else(|| GitignoreError::Directory {
            path: PathBuf::from("~"),
            message: "could not determine the home directory".to_string(),
        })
}
