//! Character classes and their fixed alphabets.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named category of characters backed by a literal alphabet.
///
/// Variant order is significant: seed characters are drawn in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Returns `true` if `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" | "special" => Ok(CharacterClass::Symbol),
            _ => Err(ConfigError::UnknownClass(s.trim().to_string())),
        }
    }
}

/// Concatenates the alphabets of `classes` in the order given.
///
/// Callers pass an ordered set, so the result is deterministic for a
/// given selection.
pub fn combined_alphabet<'a, I>(classes: I) -> Vec<char>
where
    I: IntoIterator<Item = &'a CharacterClass>,
{
    classes
        .into_iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}
