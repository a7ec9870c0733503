//! Per-file processing pipeline and batch driver.
//!
//! One file is processed as: read whole file -> segment -> locate target
//! body per notes section -> simplify -> splice (replace in place, or
//! insert a new block at the `#ATTACKS:;` anchor) -> write whole file.
//! Files in a batch are handled one at a time; a failure on one file is
//! logged and does not stop the rest.

use crate::backup::backup_file;
use crate::chart::{ATTACKS_ANCHOR, ChartSelector};
use crate::discover::find_chart_files;
use crate::error::{Error, Result};
use crate::export::ExtractedChart;
use crate::simfile::{SectionKind, locate_body, segment};
use crate::transform::{InsertSide, build_block, insert_block, replace_lines, simplify};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// What to do with the simplified body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Splice the simplified body over the original, in place.
    Replace,
    /// Leave the original sub-chart alone and insert the simplified body
    /// as a new labeled block next to the anchor.
    Insert {
        side: InsertSide,
        new_selector: ChartSelector,
    },
}

impl Action {
    /// Build an action from the raw string surface.
    ///
    /// Any action string containing `"replace"` (case-insensitive) means
    /// Replace. Everything else means Insert, on the Before side iff the
    /// string contains `"before"`. Insert requires a `new_section` pair;
    /// it is validated here, before any file I/O.
    pub fn from_raw(action: &str, new_section: Option<&str>) -> Result<Self> {
        if action.trim().is_empty() {
            return Err(Error::MissingParameter("action"));
        }
        let lowered = action.to_lowercase();
        if lowered.contains("replace") {
            return Ok(Self::Replace);
        }
        let pair = new_section.ok_or(Error::MissingParameter("new-section"))?;
        let new_selector = ChartSelector::parse(pair)?;
        let side = if lowered.contains("before") {
            InsertSide::Before
        } else {
            InsertSide::After
        };
        Ok(Self::Insert { side, new_selector })
    }
}

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub failures: usize,
}

// The reference tool round-trips files through split('\n') / join('\n'),
// so carriage returns and trailing empty segments survive untouched.
// str::lines() would drop both.
fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Simplify the selected sub-chart of one file.
///
/// Every notes section with a non-empty located body is handled. Replace
/// and Insert each re-read the file before splicing, so later sections see
/// the text earlier sections already wrote.
pub fn process_file(path: impl AsRef<Path>, selector: &ChartSelector, action: &Action) -> Result<()> {
    let path = path.as_ref();
    info!("Processing chart file: {}", path.display());

    let content = fs::read_to_string(path)?;
    let lines = split_lines(&content);

    for section in segment(&lines) {
        if section.kind != SectionKind::Notes {
            continue;
        }
        let Some(body) = locate_body(&section, selector) else {
            continue;
        };
        if body.is_empty() {
            continue;
        }
        let simplified = simplify(&body);
        match action {
            Action::Replace => replace_in_file(path, &body, &simplified)?,
            Action::Insert { side, new_selector } => {
                insert_in_file(path, &simplified, new_selector, *side)?;
            }
        }
    }

    Ok(())
}

fn replace_in_file(path: &Path, original: &[String], replacement: &[String]) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let mut lines = split_lines(&content);

    if replace_lines(&mut lines, original, replacement) {
        fs::write(path, lines.join("\n"))?;
        info!("Replaced target body in: {}", path.display());
    } else {
        // Expected when the body was already rewritten on an earlier run.
        warn!("Original target body not found in: {}", path.display());
    }
    Ok(())
}

fn insert_in_file(
    path: &Path,
    body: &[String],
    new_selector: &ChartSelector,
    side: InsertSide,
) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let mut lines = split_lines(&content);
    let block = build_block(new_selector, body);

    if insert_block(&mut lines, &block, side) {
        fs::write(path, lines.join("\n"))?;
        info!("Inserted new {} sub-chart in: {}", new_selector, path.display());
    } else {
        warn!("Anchor {} not found in: {}", ATTACKS_ANCHOR, path.display());
    }
    Ok(())
}

/// Read-only extraction of the target body from one file.
pub fn extract_file(path: impl AsRef<Path>, selector: &ChartSelector) -> Result<Vec<ExtractedChart>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lines = split_lines(&content);

    Ok(segment(&lines)
        .into_iter()
        .filter(|section| section.kind == SectionKind::Notes)
        .filter_map(|section| locate_body(&section, selector))
        .filter(|body| !body.is_empty())
        .map(|body| ExtractedChart::new(path.to_path_buf(), selector, body))
        .collect())
}

/// Backup then process every chart file under `root`.
pub fn process_directory(
    root: impl AsRef<Path>,
    selector: &ChartSelector,
    action: &Action,
) -> Result<BatchSummary> {
    let files = find_chart_files(root)?;
    info!("Found {} chart files to process", files.len());

    let mut summary = BatchSummary {
        files_found: files.len(),
        ..Default::default()
    };
    for file in &files {
        let result = backup_file(file).and_then(|_| process_file(file, selector, action));
        match result {
            Ok(()) => summary.files_processed += 1,
            Err(e) => {
                error!("Error processing {}: {}", file.display(), e);
                summary.failures += 1;
            }
        }
    }
    Ok(summary)
}

/// Extract the target body from every chart file under `root`.
pub fn extract_directory(
    root: impl AsRef<Path>,
    selector: &ChartSelector,
) -> Result<Vec<ExtractedChart>> {
    let files = find_chart_files(root)?;
    info!("Found {} chart files to inspect", files.len());

    let mut extracted = Vec::new();
    for file in &files {
        match extract_file(file, selector) {
            Ok(charts) => extracted.extend(charts),
            Err(e) => error!("Error reading {}: {}", file.display(), e),
        }
    }
    Ok(extracted)
}

/// Backup-only pass over every chart file under `root`.
pub fn backup_directory(root: impl AsRef<Path>) -> Result<BatchSummary> {
    let files = find_chart_files(root)?;
    info!("Found {} chart files to backup", files.len());

    let mut summary = BatchSummary {
        files_found: files.len(),
        ..Default::default()
    };
    for file in &files {
        match backup_file(file) {
            Ok(_) => summary.files_processed += 1,
            Err(e) => {
                error!("Error creating backup for {}: {}", file.display(), e);
                summary.failures += 1;
            }
        }
    }
    Ok(summary)
}
