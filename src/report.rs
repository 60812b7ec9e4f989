//! Strength report types: tier, suggestions and the report itself.

use std::fmt;

/// Highest score attainable: six positive tests, no penalties.
pub const MAX_SCORE: u8 = 6;

/// Coarse strength label derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Improvement hint emitted by a failed or penalizing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    MinLength,
    PreferLength,
    AddLowercase,
    AddUppercase,
    AddDigits,
    AddSpecial,
    AvoidRepeats,
    AvoidSequences,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::MinLength => "use at least 8 characters.",
            Suggestion::PreferLength => "prefer length over 12.",
            Suggestion::AddLowercase => "add lowercase letters.",
            Suggestion::AddUppercase => "add uppercase letters.",
            Suggestion::AddDigits => "add digits.",
            Suggestion::AddSpecial => "add special characters.",
            Suggestion::AvoidRepeats => "avoid repeated characters.",
            Suggestion::AvoidSequences => "avoid predictable sequences.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a strength evaluation.
///
/// `raw_score` is the unclamped sum of all test outcomes and may be
/// negative; `score` is the same value floored at 0 and drives both the
/// tier and the percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub raw_score: i32,
    pub tier: StrengthTier,
    pub suggestions: Vec<Suggestion>,
}

impl StrengthReport {
    pub(crate) fn from_raw(raw_score: i32, suggestions: Vec<Suggestion>) -> Self {
        let score = raw_score.clamp(0, MAX_SCORE as i32) as u8;
        Self {
            score,
            raw_score,
            tier: StrengthTier::from_score(score),
            suggestions,
        }
    }

    /// Report for the empty string: nothing to score, nothing to suggest.
    pub(crate) fn empty() -> Self {
        Self::from_raw(0, Vec::new())
    }

    /// Share of the maximum score, as shown by a progress bar. Never negative.
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE) * 100.0
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|s| s.message()).collect()
    }

    /// `true` when produced for empty input, where a UI shows a prompt
    /// instead of a tier.
    pub fn is_empty_input(&self) -> bool {
        self.raw_score == 0 && self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(2), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(6), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(StrengthTier::Weak.to_string(), "Weak");
        assert_eq!(StrengthTier::Medium.label(), "Medium");
        assert_eq!(StrengthTier::Strong.label(), "Strong");
    }

    #[test]
    fn test_negative_raw_score_clamped() {
        let report = StrengthReport::from_raw(-2, vec![Suggestion::AvoidRepeats]);
        assert_eq!(report.score, 0);
        assert_eq!(report.raw_score, -2);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(report.percentage(), 0.0);
        assert_eq!(report.messages(), vec!["avoid repeated characters."]);
    }

    #[test]
    fn test_percentage_full() {
        let report = StrengthReport::from_raw(6, Vec::new());
        assert_eq!(report.percentage(), 100.0);
    }

    #[test]
    fn test_empty_report() {
        let report = StrengthReport::empty();
        assert!(report.is_empty_input());
        assert_eq!(report.score, 0);
        assert_eq!(report.tier, StrengthTier::Weak);
    }
}
