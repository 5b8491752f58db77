//! Password strength scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::counts::CharCounts;
use crate::sections::{
    case_mix_points, combination_points, digit_points, length_points, special_points,
};
use crate::types::ScoreBreakdown;

/// A password is acceptable when its score strictly exceeds this threshold.
pub const ACCEPTANCE_THRESHOLD: u32 = 50;

/// Debounce window between a keystroke and the evaluation it triggers.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates a password and returns the per-category breakdown.
///
/// Pure and total: any string evaluates, including the empty one, and
/// repeated calls return the same breakdown. Length and class counts are
/// per `char`; multi-codepoint graphemes are not grouped.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `ScoreBreakdown` with one entry per scoring section.
pub fn breakdown(password: &SecretString) -> ScoreBreakdown {
    let pwd = password.expose_secret();
    let counts = CharCounts::scan(pwd);

    ScoreBreakdown {
        length: length_points(pwd.chars().count()),
        case_mix: case_mix_points(&counts),
        digits: digit_points(counts.digits),
        specials: special_points(counts.specials),
        bonus: combination_points(&counts),
    }
}

/// Evaluates a password and returns its strength score.
pub fn score(password: &SecretString) -> u32 {
    breakdown(password).total()
}

/// Whether the password scores above [`ACCEPTANCE_THRESHOLD`].
///
/// The comparison is strict: a score equal to the threshold is rejected.
pub fn is_acceptable(password: &SecretString) -> bool {
    score(password) > ACCEPTANCE_THRESHOLD
}

/// Debounced evaluation that sends the breakdown via channel.
///
/// Waits out the debounce window first; if `token` was cancelled in the
/// meantime (a newer keystroke superseded this evaluation) nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreBreakdown>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded, skipping");
        return;
    }

    if let Err(e) = tx.send(breakdown(password)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send score breakdown: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_score_tx_sends_breakdown() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = secret("TestPass123!");
        score_tx(&pwd, token, tx).await;

        let breakdown = rx.recv().await.expect("Should receive breakdown");
        assert_eq!(breakdown.total(), score(&pwd));
    }

    #[tokio::test]
    async fn test_score_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("TestPass123!");
        score_tx(&pwd, token, tx).await;

        assert!(rx.try_recv().is_err());
    }
}
