use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Novice,
    Beginner,
    Easy,
    Medium,
    Hard,
    Challenge,
    Expert,
    Master,
}

/// Difficulties whose marker lines terminate a sub-chart body scan.
///
/// A body extracted for one difficulty ends at the first line equal to any
/// of these markers. The set is closed: `Novice:` and `Beginner:` never act
/// as boundaries, so a Beginner body always runs up to the next listed
/// level (or the end of the notes section).
pub const BOUNDARY_DIFFICULTIES: [Difficulty; 6] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Challenge,
    Difficulty::Expert,
    Difficulty::Master,
];

impl Difficulty {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The colon-suffixed form a difficulty takes as a line of a `#NOTES:`
    /// block (e.g. `"Beginner:"`).
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Novice => "Novice:",
            Self::Beginner => "Beginner:",
            Self::Easy => "Easy:",
            Self::Medium => "Medium:",
            Self::Hard => "Hard:",
            Self::Challenge => "Challenge:",
            Self::Expert => "Expert:",
            Self::Master => "Master:",
        }
    }

    pub fn is_boundary(&self) -> bool {
        BOUNDARY_DIFFICULTIES.contains(self)
    }
}

/// Whether a trimmed line marks the start of the next difficulty level.
pub fn is_boundary_marker(trimmed: &str) -> bool {
    BOUNDARY_DIFFICULTIES
        .iter()
        .any(|difficulty| trimmed == difficulty.marker())
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
