use crate::chart::{COMMENT_PREFIX, DANCE_SINGLE_TAG, NOTES_PREFIX};
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SectionKind {
    Notes,
    DanceSingle,
    Unknown,
}

impl SectionKind {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// One coarse segment of a `.sm` file.
///
/// `lines` holds the original untrimmed text, starting with the marker line
/// that opened the section. `start_offset` is the index of that marker line
/// in the whole-file line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
    pub start_offset: usize,
}

/// Split a file's lines into sections.
///
/// A line opens a new section when it starts with `#NOTES:`, or starts with
/// `//` and mentions `dance-single`. Lines before the first marker belong to
/// no section and are dropped; a file with no markers yields no sections.
pub fn segment(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for (index, line) in lines.iter().enumerate() {
        if let Some(kind) = section_start_kind(line) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section {
                kind,
                lines: vec![line.clone()],
                start_offset: index,
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line.clone());
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

fn section_start_kind(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim();
    if trimmed.starts_with(NOTES_PREFIX) {
        Some(SectionKind::Notes)
    } else if trimmed.starts_with(COMMENT_PREFIX) && trimmed.contains(DANCE_SINGLE_TAG) {
        Some(SectionKind::DanceSingle)
    } else {
        None
    }
}
