use crate::chart::{ATTACKS_ANCHOR, COMMENT_PREFIX, ChartSelector};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Which side of the `#ATTACKS:;` anchor a new block lands on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum InsertSide {
    Before,
    After,
}

/// Find the first contiguous occurrence of `needle` in `haystack`.
///
/// Element-wise exact comparison over every start offset; returns the
/// lowest matching index. An empty needle never matches.
pub fn find_lines(haystack: &[String], needle: &[String]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| haystack[start..start + needle.len()] == *needle)
}

/// Replace the first occurrence of `needle` with `replacement`, in place.
///
/// Returns whether a match was found. The replacement may have a different
/// length than the needle.
pub fn replace_lines(lines: &mut Vec<String>, needle: &[String], replacement: &[String]) -> bool {
    match find_lines(lines, needle) {
        Some(start) => {
            lines.splice(start..start + needle.len(), replacement.iter().cloned());
            true
        }
        None => false,
    }
}

/// Build a complete new sub-chart block for insertion.
///
/// Shape: blank line, `//`, style marker, blank line, difficulty marker,
/// steps marker, body lines, closing `;`.
pub fn build_block(selector: &ChartSelector, body: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(body.len() + 7);
    block.push(String::new());
    block.push(COMMENT_PREFIX.to_string());
    block.push(selector.style.clone());
    block.push(String::new());
    block.push(selector.difficulty.clone());
    block.push(selector.steps.clone());
    block.extend(body.iter().cloned());
    block.push(";".to_string());
    block
}

/// Insert `block` next to the `#ATTACKS:;` anchor, in place.
///
/// Returns whether the anchor was found; without it the lines are left
/// untouched.
pub fn insert_block(lines: &mut Vec<String>, block: &[String], side: InsertSide) -> bool {
    let Some(anchor) = lines.iter().position(|line| line.trim() == ATTACKS_ANCHOR) else {
        return false;
    };
    let index = match side {
        InsertSide::Before => anchor,
        InsertSide::After => anchor + 1,
    };
    lines.splice(index..index, block.iter().cloned());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_lines_exact_match() {
        let haystack = lines(&["a", "b", "c", "d"]);
        assert_eq!(find_lines(&haystack, &lines(&["b", "c"])), Some(1));
        assert_eq!(find_lines(&haystack, &lines(&["c", "d"])), Some(2));
        assert_eq!(find_lines(&haystack, &lines(&["b", "d"])), None);
    }

    #[test]
    fn test_find_lines_requires_untrimmed_equality() {
        let haystack = lines(&["  a", "b"]);
        assert_eq!(find_lines(&haystack, &lines(&["a"])), None);
        assert_eq!(find_lines(&haystack, &lines(&["  a"])), Some(0));
    }

    #[test]
    fn test_find_lines_empty_or_oversized_needle() {
        let haystack = lines(&["a"]);
        assert_eq!(find_lines(&haystack, &[]), None);
        assert_eq!(find_lines(&haystack, &lines(&["a", "b"])), None);
    }

    #[test]
    fn test_replace_uses_first_match() {
        let mut file = lines(&["x", "a", "b", "y", "a", "b"]);
        assert!(replace_lines(&mut file, &lines(&["a", "b"]), &lines(&["z"])));
        assert_eq!(file, lines(&["x", "z", "y", "a", "b"]));
    }

    #[test]
    fn test_replace_missing_needle_is_noop() {
        let mut file = lines(&["x", "y"]);
        assert!(!replace_lines(&mut file, &lines(&["a"]), &lines(&["z"])));
        assert_eq!(file, lines(&["x", "y"]));
    }

    #[test]
    fn test_replace_with_different_length() {
        let mut file = lines(&["x", "a", "y"]);
        assert!(replace_lines(&mut file, &lines(&["a"]), &lines(&["1", "2", "3"])));
        assert_eq!(file, lines(&["x", "1", "2", "3", "y"]));
    }

    #[test]
    fn test_block_shape() {
        let selector = ChartSelector::new("Novice", "1");
        let block = build_block(&selector, &lines(&["0000", "1000"]));
        assert_eq!(
            block,
            lines(&["", "//", "dance-single:", "", "Novice:", "1:", "0000", "1000", ";"])
        );
    }

    #[test]
    fn test_insert_after_anchor() {
        let mut file = lines(&["#TITLE:x;", "#ATTACKS:;", "#BGCHANGES:;"]);
        assert!(insert_block(&mut file, &lines(&["new"]), InsertSide::After));
        assert_eq!(file, lines(&["#TITLE:x;", "#ATTACKS:;", "new", "#BGCHANGES:;"]));
    }

    #[test]
    fn test_insert_before_anchor() {
        let mut file = lines(&["#TITLE:x;", "#ATTACKS:;"]);
        assert!(insert_block(&mut file, &lines(&["new"]), InsertSide::Before));
        assert_eq!(file, lines(&["#TITLE:x;", "new", "#ATTACKS:;"]));
    }

    #[test]
    fn test_insert_anchor_matches_trimmed() {
        let mut file = lines(&["   #ATTACKS:;   "]);
        assert!(insert_block(&mut file, &lines(&["new"]), InsertSide::After));
        assert_eq!(file, lines(&["   #ATTACKS:;   ", "new"]));
    }

    #[test]
    fn test_insert_without_anchor_is_noop() {
        let mut file = lines(&["#TITLE:x;"]);
        assert!(!insert_block(&mut file, &lines(&["new"]), InsertSide::After));
        assert_eq!(file, lines(&["#TITLE:x;"]));
    }

    #[test]
    fn test_insert_side_parses_case_insensitively() {
        use std::str::FromStr;
        assert_eq!(InsertSide::from_str("before"), Ok(InsertSide::Before));
        assert_eq!(InsertSide::from_str("AFTER"), Ok(InsertSide::After));
        assert!(InsertSide::from_str("sideways").is_err());
    }
}
