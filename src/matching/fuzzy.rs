use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize;
use crate::vocabulary::shares_vocabulary_group;

/// Tokens that mark a string as a level descriptor. Numeric comparison must
/// never fire on non-level text (a street number is not a study year).
static RE_LEVEL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"primary|secondary|p\d|s\d|jc|grade|year").unwrap());

static RE_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Decide whether two free-text values denote the same subject, level or
/// location. Strategies are applied in order, short-circuiting on the first
/// verdict:
///
/// 1. exact match of the normalized strings;
/// 2. substring containment, in either direction;
/// 3. numeric interval comparison, only when both strings are level
///    descriptors carrying digits — its verdict is final, so "Secondary 1-2"
///    does not leak into "Secondary 3-4" through the shared level vocabulary;
/// 4. shared controlled-vocabulary group.
///
/// Symmetric: `fuzzy_match(a, b) == fuzzy_match(b, a)`.
pub fn fuzzy_match(value1: &str, value2: &str) -> bool {
    let norm1 = normalize(value1);
    let norm2 = normalize(value2);

    if norm1 == norm2 {
        return true;
    }

    if norm1.contains(&norm2) || norm2.contains(&norm1) {
        return true;
    }

    if let Some(verdict) = numeric_level_match(&norm1, &norm2) {
        return verdict;
    }

    shares_vocabulary_group(&norm1, &norm2)
}

/// Interval semantics over the digit runs of two level descriptors.
/// Returns `None` when the strategy does not apply (either side lacks a
/// level token or digits, or carries more than two digit runs).
fn numeric_level_match(norm1: &str, norm2: &str) -> Option<bool> {
    if !RE_LEVEL_TOKEN.is_match(norm1) || !RE_LEVEL_TOKEN.is_match(norm2) {
        return None;
    }

    let nums1 = digit_runs(norm1);
    let nums2 = digit_runs(norm2);

    match (nums1.as_slice(), nums2.as_slice()) {
        ([a], [b]) => Some(a == b),
        // A pair is an inclusive [min, max] band; a single value matches
        // when it falls inside it.
        ([min, max], [value]) | ([value], [min, max]) => Some(value >= min && value <= max),
        ([min1, max1], [min2, max2]) => Some(max1 >= min2 && max2 >= min1),
        _ => None,
    }
}

fn digit_runs(text: &str) -> Vec<u32> {
    RE_DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_after_normalization() {
        assert!(fuzzy_match("  Tampines ", "tampines"));
        assert!(fuzzy_match("Chinese (Higher)", "chinese higher"));
    }

    #[test]
    fn substring_in_either_direction() {
        assert!(fuzzy_match("Sec 3 Chemistry", "Chemistry"));
        assert!(fuzzy_match("Chemistry", "Sec 3 Chemistry"));
        assert!(fuzzy_match("Tampines", "Tampines Street 81"));
    }

    #[test]
    fn vocabulary_aliases_match() {
        assert!(fuzzy_match("E Maths", "Mathematics"));
        assert!(fuzzy_match("Econs", "H2 Economics"));
        assert!(fuzzy_match("O Level", "Secondary"));
    }

    #[test]
    fn single_levels_compare_by_number() {
        assert!(fuzzy_match("Primary 5", "P5"));
        assert!(fuzzy_match("Secondary 3", "S3"));
        assert!(!fuzzy_match("Secondary 2", "Secondary 3"));
        assert!(!fuzzy_match("JC1", "JC2"));
    }

    #[test]
    fn single_level_matches_containing_band() {
        assert!(fuzzy_match("Secondary 3", "Secondary 3-4"));
        assert!(fuzzy_match("Primary 1-3", "Primary 2"));
        assert!(!fuzzy_match("Primary 5", "Primary 1-3"));
    }

    #[test]
    fn bands_match_when_intervals_overlap() {
        assert!(fuzzy_match("Secondary 3-4", "Secondary 4-5"));
        assert!(!fuzzy_match("Secondary 3-4", "Secondary 1-2"));
        assert!(!fuzzy_match("Primary 1-3", "Primary 4-6"));
    }

    #[test]
    fn numeric_verdict_is_final_for_level_descriptors() {
        // Both sides sit in the secondary-school vocabulary group, but the
        // digit intervals disagree, so the group must not rescue the match.
        assert!(!fuzzy_match("Secondary 1-2", "Secondary 3-4"));
    }

    #[test]
    fn numeric_match_requires_level_text_on_both_sides() {
        assert!(!fuzzy_match("Primary 1-3", "Room 2"));
        assert!(!fuzzy_match("Blk 3 Tampines", "Primary 3"));
    }

    #[test]
    fn digitless_level_text_falls_through_to_vocabulary() {
        assert!(fuzzy_match("Primary", "P3"));
        assert!(fuzzy_match("Secondary 1-2", "O Level"));
    }

    #[test]
    fn year_descriptors_use_interval_logic() {
        assert!(fuzzy_match("Year 11", "Year 10-12"));
        assert!(!fuzzy_match("Year 7", "Year 10-12"));
    }

    #[test]
    fn is_symmetric() {
        let pairs = [
            ("E Maths", "Mathematics"),
            ("Secondary 3", "Secondary 3-4"),
            ("Primary 1-3", "Room 2"),
            ("Tampines", "Jurong"),
        ];
        for (a, b) in pairs {
            assert_eq!(fuzzy_match(a, b), fuzzy_match(b, a), "{a} vs {b}");
        }
    }
}
