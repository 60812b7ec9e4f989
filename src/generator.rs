//! Password generator - seeded class coverage, uniform fill and shuffle.
//!
//! Randomness is injected through [`rand::Rng`]. Generated passwords are
//! meant for a convenience tool: no cryptographic strength is claimed,
//! only that every draw is independent and uniform over its alphabet.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::charset::combined_alphabet;
use crate::request::GenerationRequest;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("At least one character class must be selected")]
    NoClassSelected,
}

/// A generated password. Zeroized on drop, redacted in `Debug`.
#[derive(Debug)]
pub struct GeneratedPassword(SecretString);

impl GeneratedPassword {
    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn into_secret(self) -> SecretString {
        self.0
    }
}

impl ExposeSecret<str> for GeneratedPassword {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Generates a password for `request` drawing from `rng`.
///
/// # Algorithm
/// 1. One seed character per enabled class, in class order, truncated to
///    `length` when there are more classes than positions
/// 2. Remaining positions drawn from the combined alphabet
/// 3. Fisher-Yates shuffle over the whole sequence
///
/// # Errors
/// Returns [`GenerateError::NoClassSelected`] if no class is enabled.
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<GeneratedPassword, GenerateError>
where
    R: Rng + ?Sized,
{
    if request.classes.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: no character class selected");
        return Err(GenerateError::NoClassSelected);
    }

    let charset = combined_alphabet(&request.classes);
    let mut chars: Vec<char> = Vec::with_capacity(request.length);

    for class in request.classes.iter().take(request.length) {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    while chars.len() < request.length {
        chars.push(charset[rng.gen_range(0..charset.len())]);
    }

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: {} characters from {} classes",
        chars.len(),
        request.classes.len()
    );

    let password: String = chars.into_iter().collect();
    Ok(GeneratedPassword(SecretString::new(password.into())))
}

/// Generates a password using the thread-local generator.
pub fn generate_password(request: &GenerationRequest) -> Result<GeneratedPassword, GenerateError> {
    generate(request, &mut rand::thread_rng())
}
