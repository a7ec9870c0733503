use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Prefix that opens a `#NOTES:` section.
pub const NOTES_PREFIX: &str = "#NOTES:";

/// Comment prefix; a comment line naming the style also opens a section.
pub const COMMENT_PREFIX: &str = "//";

/// The only style this tool targets.
pub const DANCE_SINGLE_MARKER: &str = "dance-single:";

/// The substring that identifies the style inside a comment line.
pub const DANCE_SINGLE_TAG: &str = "dance-single";

/// Fixed anchor line for inserting newly built sub-charts.
pub const ATTACKS_ANCHOR: &str = "#ATTACKS:;";

/// The empty 4-panel row a collapsed step row is rewritten to.
pub const REST_ROW: &str = "0000";

/// Chart file extension (matched case-insensitively).
pub const CHART_EXTENSION: &str = "sm";

/// Extension given to backup siblings.
pub const BACKUP_EXTENSION: &str = "bak";

/// Identifies one sub-chart of a `.sm` file by its marker lines.
///
/// All three fields are the colon-suffixed forms the markers take as lines
/// of a `#NOTES:` block (`"dance-single:"`, `"Beginner:"`, `"2:"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSelector {
    pub style: String,
    pub difficulty: String,
    pub steps: String,
}

impl ChartSelector {
    pub fn new(difficulty: &str, steps: &str) -> Self {
        Self {
            style: DANCE_SINGLE_MARKER.to_string(),
            difficulty: format!("{}:", difficulty),
            steps: format!("{}:", steps),
        }
    }

    /// Parse a `"Difficulty:Steps"` pair (e.g. `"Beginner:2"`).
    pub fn parse(pair: &str) -> Result<Self> {
        let (difficulty, steps) = pair
            .split_once(':')
            .ok_or_else(|| Error::InvalidSelector(pair.to_string()))?;
        if difficulty.trim().is_empty() || steps.trim().is_empty() {
            return Err(Error::InvalidSelector(pair.to_string()));
        }
        Ok(Self::new(difficulty.trim(), steps.trim()))
    }

    /// Difficulty name without the trailing colon, for display.
    pub fn difficulty_name(&self) -> &str {
        self.difficulty.trim_end_matches(':')
    }

    pub fn steps_value(&self) -> &str {
        self.steps.trim_end_matches(':')
    }
}

impl Default for ChartSelector {
    fn default() -> Self {
        Self::new(crate::chart::Difficulty::Beginner.name(), "2")
    }
}

impl std::fmt::Display for ChartSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.difficulty_name(), self.steps_value())
    }
}
