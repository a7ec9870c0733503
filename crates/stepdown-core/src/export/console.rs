//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use super::ExtractedChart;

/// Format an extracted sub-chart for console display.
///
/// Returns a multi-line string: a colored header naming the file and the
/// selector, then the body lines with 1-based line numbers.
pub fn format_extracted(chart: &ExtractedChart) -> String {
    let mut output = String::new();

    let header = format!(
        "{} [{} {}:{}]",
        chart.file.display(),
        chart.style.trim_end_matches(':'),
        chart.difficulty,
        chart.steps
    );
    let _ = writeln!(output, "{}", header.bold());

    let border: String = "━".repeat(header.chars().count().max(40));
    let _ = writeln!(output, "{}", border.dimmed());

    for (index, line) in chart.lines.iter().enumerate() {
        let _ = writeln!(output, "{:>4}  {}", (index + 1).dimmed(), line);
    }
    let _ = writeln!(output, "{} lines", chart.lines.len().bold());

    output
}
