//! Environment-driven defaults for the generator.
//!
//! Handles reading the default length and class selection.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::charset::CharacterClass;
use crate::request::{DEFAULT_LENGTH, GenerationRequest};

pub const LENGTH_ENV: &str = "PWD_GEN_LENGTH";
pub const CLASSES_ENV: &str = "PWD_GEN_CLASSES";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid password length: {0}")]
    InvalidLength(String),
    #[error("Unknown character class: {0}")]
    UnknownClass(String),
    #[error("No character class configured")]
    NoClasses,
}

/// Returns the default password length.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_LENGTH`
/// 2. Built-in default of 16
pub fn length_from_env() -> Result<usize, ConfigError> {
    match std::env::var(LENGTH_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidLength(raw)),
        Err(_) => Ok(DEFAULT_LENGTH),
    }
}

/// Returns the enabled character classes.
///
/// Reads a comma-separated list from `PWD_GEN_CLASSES`
/// (e.g. `upper,lower,digits`). Falls back to all classes when unset.
pub fn classes_from_env() -> Result<BTreeSet<CharacterClass>, ConfigError> {
    let raw = match std::env::var(CLASSES_ENV) {
        Ok(raw) => raw,
        Err(_) => return Ok(CharacterClass::ALL.into_iter().collect()),
    };

    let classes = parse_classes(&raw)?;
    if classes.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("{} is set but names no character class", CLASSES_ENV);
        return Err(ConfigError::NoClasses);
    }
    Ok(classes)
}

fn parse_classes(raw: &str) -> Result<BTreeSet<CharacterClass>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<CharacterClass>)
        .collect()
}

impl GenerationRequest {
    /// Builds a request from `PWD_GEN_LENGTH` and `PWD_GEN_CLASSES`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The length is not a non-negative integer
    /// - A class name is not recognized
    /// - The class list is set but empty
    pub fn from_env() -> Result<Self, ConfigError> {
        let request = Self {
            length: length_from_env()?,
            classes: classes_from_env()?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Generator defaults: length {}, {} classes",
            request.length,
            request.classes.len()
        );

        Ok(request)
    }
}
