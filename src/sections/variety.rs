//! Character variety section - checks for lowercase, uppercase, digits, special chars.

use super::SectionResult;
use crate::report::Suggestion;

/// Scores the character classes present in the password.
///
/// Letters and digits are matched in the ASCII range only; anything
/// outside `[A-Za-z0-9]` counts as special.
pub fn character_variety_section(password: &str) -> SectionResult {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut result = SectionResult::default();
    result.credit(has_lower, Suggestion::AddLowercase);
    result.credit(has_upper, Suggestion::AddUppercase);
    result.credit(has_digit, Suggestion::AddDigits);
    result.credit(has_special, Suggestion::AddSpecial);
    result
}
