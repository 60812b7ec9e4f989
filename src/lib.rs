//! Password generation and strength evaluation library
//!
//! This library provides a random password generator that guarantees
//! coverage of the requested character classes, and a heuristic strength
//! evaluator that scores a password, assigns a tier and suggests
//! improvements.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Default generated password length (default: 16)
//! - `PWD_GEN_CLASSES`: Comma-separated enabled classes, e.g. `upper,lower,digits`
//!   (default: all classes)
//!
//! Generated passwords come from a general-purpose random generator and
//! are not intended as cryptographic keys.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{evaluate, generate_password, GenerationRequest};
//!
//! let request = GenerationRequest::from_env().expect("Invalid generator settings");
//! let password = generate_password(&request).expect("No character class selected");
//!
//! let report = evaluate(&password.into_secret());
//! println!("Score: {} ({}%)", report.score, report.percentage());
//! println!("Strength: {}", report.tier);
//! for hint in report.messages() {
//!     println!("- {}", hint);
//! }
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod report;
mod request;
mod sections;

// Public API
pub use charset::{CharacterClass, combined_alphabet};
pub use config::{CLASSES_ENV, ConfigError, LENGTH_ENV, classes_from_env, length_from_env};
pub use evaluator::evaluate;
pub use generator::{GenerateError, GeneratedPassword, generate, generate_password};
pub use report::{MAX_SCORE, StrengthReport, StrengthTier, Suggestion};
pub use request::{DEFAULT_LENGTH, GenerationRequest};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_tx};
