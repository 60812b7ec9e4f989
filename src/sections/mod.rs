//! Password evaluation sections
//!
//! Each section runs a fixed group of heuristic tests and reports the
//! score delta plus the suggestions of the tests that failed.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

use crate::report::Suggestion;

/// Outcome of one section.
/// - `score` - sum of the +1/-1 contributions of its tests
/// - `suggestions` - hints in test order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub score: i32,
    pub suggestions: Vec<Suggestion>,
}

impl SectionResult {
    /// Records a test that awards a point on success.
    pub(crate) fn credit(&mut self, passed: bool, suggestion: Suggestion) {
        if passed {
            self.score += 1;
        } else {
            self.suggestions.push(suggestion);
        }
    }

    /// Records a test that costs a point when triggered.
    pub(crate) fn penalize(&mut self, triggered: bool, suggestion: Suggestion) {
        if triggered {
            self.score -= 1;
            self.suggestions.push(suggestion);
        }
    }
}
