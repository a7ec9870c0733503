//! Backup command implementation.
//!
//! Creates a `.bak` sibling for every chart file under the root without
//! touching the charts themselves.

use anyhow::Result;
use std::path::Path;
use stepdown_core::backup_directory;

/// Run the backup command
pub fn run(root: &Path) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    println!("stepdown {} - Backup Mode", current_version);
    println!("Processing directory: {}", root.display());

    let summary = backup_directory(root)?;

    println!(
        "Backed up {} of {} chart files ({} failures)",
        summary.files_processed, summary.files_found, summary.failures
    );
    Ok(())
}
