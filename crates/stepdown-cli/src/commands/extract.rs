//! Extract command implementation.
//!
//! Read-only: locates the target sub-chart body in every chart file and
//! prints it, as formatted text or JSON, to stdout or a file.

use anyhow::Result;
use std::fs;
use std::path::Path;
use stepdown_core::export::console::format_extracted;
use stepdown_core::{ChartSelector, extract_directory};

/// Run the extract command
pub fn run(root: &Path, section: &str, json: bool, output: Option<&Path>) -> Result<()> {
    let selector = ChartSelector::parse(section)?;
    println!(
        "Extracting {} content from: {}",
        selector,
        root.display()
    );

    let charts = extract_directory(root, &selector)?;

    let rendered = if json {
        serde_json::to_string_pretty(&charts)?
    } else {
        let mut text = String::new();
        for chart in &charts {
            text.push_str(&format_extracted(chart));
            text.push('\n');
        }
        text
    };

    if let Some(path) = output {
        fs::write(path, rendered)?;
        println!("Extract results saved to: {}", path.display());
    } else {
        print!("{}", rendered);
    }
    println!("Found {} matching sub-charts", charts.len());
    Ok(())
}
