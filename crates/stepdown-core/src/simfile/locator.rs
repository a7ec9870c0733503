use crate::chart::{ChartSelector, is_boundary_marker};
use crate::simfile::{Section, SectionKind};

/// Parser state while walking a notes section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the style marker.
    Scanning,
    /// Inside the style's chart list, before the target difficulty.
    InStyle,
    /// Collecting the target difficulty's body.
    InTargetDifficulty,
}

/// Locate the step-data body of the sub-chart named by `selector`.
///
/// Returns `None` for non-notes sections and when the target difficulty
/// marker never appears. The returned body keeps the original untrimmed
/// lines and excludes the style, difficulty and step-count marker lines as
/// well as the boundary line that ended the scan. A repeated difficulty
/// marker restarts collection, so the body belongs to the last occurrence
/// before the boundary.
pub fn locate_body(section: &Section, selector: &ChartSelector) -> Option<Vec<String>> {
    if section.kind != SectionKind::Notes {
        return None;
    }

    let mut state = ScanState::Scanning;
    let mut found = false;
    let mut body = Vec::new();

    for line in &section.lines {
        let trimmed = line.trim();

        // The style marker is never collected, wherever it appears.
        if trimmed == selector.style {
            if state == ScanState::Scanning {
                state = ScanState::InStyle;
            }
            continue;
        }

        match state {
            ScanState::Scanning => {}
            ScanState::InStyle | ScanState::InTargetDifficulty => {
                if trimmed == selector.difficulty {
                    state = ScanState::InTargetDifficulty;
                    found = true;
                    body.clear();
                    continue;
                }
                if state == ScanState::InTargetDifficulty {
                    if is_boundary_marker(trimmed) {
                        // Target search for this section ends at the first
                        // next-level marker, even if more content follows.
                        break;
                    }
                    if trimmed != selector.steps {
                        body.push(line.clone());
                    }
                }
            }
        }
    }

    if found { Some(body) } else { None }
}
