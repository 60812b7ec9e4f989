//! Pattern analysis section - detects repeated characters and predictable sequences.

use super::SectionResult;
use crate::report::Suggestion;

/// Keyboard-row runs treated as predictable, matched case-insensitively.
const PREDICTABLE_SEQUENCES: [&str; 3] = ["qwe", "asd", "zxc"];

/// Penalizes repetitive and predictable patterns.
///
/// # Returns
/// - -1 with a repetition hint if any character occurs 3+ times in a row
/// - -1 with a sequence hint if a predictable sequence is present
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    let mut result = SectionResult::default();
    result.penalize(has_repeated_run(password), Suggestion::AvoidRepeats);
    result.penalize(has_predictable_sequence(password), Suggestion::AvoidSequences);
    result
}

fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_predictable_sequence(password: &str) -> bool {
    let lowered = password.to_lowercase();
    PREDICTABLE_SEQUENCES
        .iter()
        .any(|seq| lowered.contains(*seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = pattern_analysis_section("aaaaBBBB1111");
        assert_eq!(result.score, -1);
        assert_eq!(result.suggestions, vec![Suggestion::AvoidRepeats]);
    }

    #[test]
    fn test_pattern_section_two_repeats_allowed() {
        let result = pattern_analysis_section("aabbcc11");
        assert_eq!(result.score, 0);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_pattern_section_sequence_case_insensitive() {
        let result = pattern_analysis_section("myQwErty");
        assert_eq!(result.score, -1);
        assert_eq!(result.suggestions, vec![Suggestion::AvoidSequences]);
    }

    #[test]
    fn test_pattern_section_both_penalties() {
        let result = pattern_analysis_section("zxc!!!");
        assert_eq!(result.score, -2);
        assert_eq!(
            result.suggestions,
            vec![Suggestion::AvoidRepeats, Suggestion::AvoidSequences]
        );
    }

    #[test]
    fn test_pattern_section_sequence_counted_once() {
        let result = pattern_analysis_section("qweasdzxc");
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_pattern_section_clean_password() {
        let result = pattern_analysis_section("RandomPass123!@#Word");
        assert_eq!(result, SectionResult::default());
    }

    #[test]
    fn test_pattern_section_too_short() {
        let result = pattern_analysis_section("ab");
        assert_eq!(result.score, 0);
    }
}
