//! Generation request: desired length plus the enabled character classes.

use std::collections::BTreeSet;

use crate::charset::CharacterClass;

/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    pub fn new<I>(length: usize, classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Request with every character class enabled.
    pub fn all(length: usize) -> Self {
        Self::new(length, CharacterClass::ALL)
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Number of classes whose inclusion can be guaranteed at this length.
    pub fn guaranteed_classes(&self) -> usize {
        self.classes.len().min(self.length)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::all(DEFAULT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 16);
        assert_eq!(request.classes.len(), 4);
    }

    #[test]
    fn test_duplicate_classes_collapse() {
        let request = GenerationRequest::new(
            8,
            [CharacterClass::Digit, CharacterClass::Digit, CharacterClass::Uppercase],
        );
        let classes: Vec<_> = request.classes.iter().copied().collect();
        assert_eq!(classes, vec![CharacterClass::Uppercase, CharacterClass::Digit]);
    }

    #[test]
    fn test_guaranteed_classes_bounded_by_length() {
        assert_eq!(GenerationRequest::all(2).guaranteed_classes(), 2);
        assert_eq!(GenerationRequest::all(20).guaranteed_classes(), 4);
        let request = GenerationRequest::new(10, std::iter::empty()).with_class(CharacterClass::Symbol);
        assert_eq!(request.guaranteed_classes(), 1);
    }
}
