//! Extract-mode output formatting.

pub mod console;

use serde::Serialize;
use std::path::PathBuf;

/// One located sub-chart body, ready for console or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedChart {
    pub file: PathBuf,
    pub style: String,
    pub difficulty: String,
    pub steps: String,
    pub lines: Vec<String>,
}

impl ExtractedChart {
    pub fn new(file: PathBuf, selector: &crate::chart::ChartSelector, lines: Vec<String>) -> Self {
        Self {
            file,
            style: selector.style.clone(),
            difficulty: selector.difficulty_name().to_string(),
            steps: selector.steps_value().to_string(),
            lines,
        }
    }
}
