use crate::chart::BACKUP_EXTENSION;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create a `.bak` sibling of a chart file.
///
/// Returns the backup path, or `None` when a backup already exists (the
/// existing copy is never overwritten, so the backup always holds the
/// pre-first-run content).
pub fn backup_file(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    let backup_path = path.with_extension(BACKUP_EXTENSION);

    if backup_path.exists() {
        info!("Backup already exists for: {}", path.display());
        return Ok(None);
    }

    fs::copy(path, &backup_path)?;
    info!(
        "Created backup: {} -> {}",
        path.display(),
        backup_path.display()
    );
    Ok(Some(backup_path))
}
