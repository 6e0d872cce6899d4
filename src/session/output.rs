//! Writing a resolved template to its destination.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::store::Confirmation;

/// Write `content` to `path`.
///
/// An existing file is only replaced when `overwrite` is granted. Returns
/// whether the file was written.
pub fn write_template(path: &Path, content: &str, overwrite: Confirmation) -> Result<bool> {
    if path.exists() && !overwrite.is_granted() {
        tracing::debug!("Not overwriting {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!("Wrote {}", path.display());
    Ok(true)
}
