//! Process command implementation.
//!
//! Backs up and then rewrites every chart file under the root: the target
//! sub-chart body is simplified and either spliced back in place or
//! inserted as a new labeled sub-chart at the `#ATTACKS:;` anchor.

use anyhow::Result;
use std::path::Path;
use stepdown_core::{Action, ChartSelector, process_directory};

/// Run the process command
pub fn run(root: &Path, section: &str, action: &str, new_section: Option<&str>) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    println!("stepdown {} - Process Mode", current_version);

    // Validate everything before any file is read or written.
    let selector = ChartSelector::parse(section)?;
    let action = Action::from_raw(action, new_section)?;

    let mode = match &action {
        Action::Replace => "replacing".to_string(),
        Action::Insert { side, new_selector } => {
            format!("inserting {} ({:?} anchor)", new_selector, side)
        }
    };
    println!(
        "Processing and {} {} content in: {}",
        mode,
        selector,
        root.display()
    );

    let summary = process_directory(root, &selector, &action)?;

    println!(
        "Processed {} of {} chart files ({} failures)",
        summary.files_processed, summary.files_found, summary.failures
    );
    Ok(())
}
