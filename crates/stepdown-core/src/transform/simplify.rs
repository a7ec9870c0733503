use crate::chart::REST_ROW;

/// Collapse a sub-chart body to a simplified pattern.
///
/// Step rows (digits 0/1/2 and whitespace only) are rewritten to `0000`
/// unless the previously emitted row was already `0000`, so a run of taps
/// becomes alternating rest/original rows and never two literal `0000`
/// rows in a row. Hold-end rows contain a `3` and therefore never classify
/// as step rows; they pass through byte-exact, as do separators (blank,
/// `,`, `;`) and anything else.
///
/// Separators and pass-through rows do not touch the previous-emitted
/// tracker, so a `0000` emitted before a measure separator still
/// suppresses collapsing of the first row after it. Output always has the
/// same number of lines as the input.
pub fn simplify(body: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(body.len());
    let mut previous_emitted: Option<String> = None;

    for line in body {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed == "," || trimmed == ";" {
            out.push(line.clone());
            continue;
        }

        if is_step_row(trimmed) {
            if previous_emitted.as_deref() != Some(REST_ROW) {
                out.push(REST_ROW.to_string());
                previous_emitted = Some(REST_ROW.to_string());
            } else {
                out.push(line.clone());
                previous_emitted = Some(trimmed.to_string());
            }
        } else {
            out.push(line.clone());
        }
    }

    out
}

/// A row is collapsible step data iff it holds only digits 0, 1, 2 and
/// whitespace. A `3` (hold end) disqualifies the row, keeping holds
/// closed exactly where the original chart closed them.
fn is_step_row(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| matches!(c, '0' | '1' | '2') || c.is_whitespace())
}
