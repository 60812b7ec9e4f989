//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::report::StrengthReport;
use crate::sections::{
    SectionResult, character_variety_section, length_section, pattern_analysis_section,
};

/// Delay before an async evaluation runs, so that rapid successive
/// inputs cancel each other instead of all being evaluated.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength.
///
/// Total over all inputs. The empty string yields score 0, tier Weak and
/// no suggestions. Suggestions follow test order: length, variety,
/// patterns.
pub fn evaluate(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthReport::empty();
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    let mut raw_score = 0;
    let mut suggestions = Vec::new();

    for (_section_name, section_fn) in sections {
        let result = section_fn(pwd);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} scored {}", _section_name, result.score);

        raw_score += result.score;
        suggestions.extend(result.suggestions);
    }

    StrengthReport::from_raw(raw_score, suggestions)
}

/// Async version that sends the report via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled by then (a newer
/// input superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let report = evaluate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}
