//! Length section - minimum and preferred length.

use super::SectionResult;
use crate::report::Suggestion;

const MIN_LENGTH: usize = 8;
const PREFERRED_LENGTH: usize = 12;

/// Scores password length in characters.
///
/// # Returns
/// - +1 for at least 8 characters, otherwise a minimum-length hint
/// - +1 for at least 12 characters; between 8 and 11 a preferred-length hint
pub fn length_section(password: &str) -> SectionResult {
    let len = password.chars().count();
    let mut result = SectionResult::default();

    result.credit(len >= MIN_LENGTH, Suggestion::MinLength);

    if len >= PREFERRED_LENGTH {
        result.score += 1;
    } else if len >= MIN_LENGTH {
        result.suggestions.push(Suggestion::PreferLength);
    }

    result
}
