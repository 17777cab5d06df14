//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{Criteria, CriterionReport};
use crate::sections::{
    length_section, lowercase_section, numbers_section, special_section, uppercase_section,
    SectionFn,
};
use crate::strength::StrengthLevel;

/// Outcome of scoring a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Number of satisfied criteria, 0 to 6.
    pub score: u8,
    pub level: StrengthLevel,
    pub detail: &'static str,
    pub criteria: Criteria,
    /// Always five lines: uppercase, lowercase, numbers, special, length.
    pub report: Vec<CriterionReport>,
}

/// Scores a password against the six strength criteria.
///
/// Total over all inputs: an empty string scores 0 with every criterion
/// unmet. Callers that want a blank display for empty input should use
/// [`crate::StrengthIndicator::for_password`].
pub fn score(password: &str) -> ScoreResult {
    let criteria = Criteria::evaluate(password);
    let score = criteria.count();
    let level = StrengthLevel::from_score(score);

    // Report order is fixed
    let sections: [(&str, SectionFn); 5] = [
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("numbers", numbers_section),
        ("special", special_section),
        ("length", length_section),
    ];

    let report = sections
        .iter()
        .map(|(section_name, section_fn)| {
            let line = section_fn(&criteria);
            #[cfg(feature = "tracing")]
            tracing::trace!("Section {}: met={}", section_name, line.met);
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            line
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        "Scored password of {} chars: {}/{} ({})",
        password.chars().count(),
        score,
        crate::strength::MAX_SCORE,
        level
    );

    ScoreResult {
        score,
        level,
        detail: level.detail(),
        criteria,
        report,
    }
}

/// Scores a secret password, exposing it only for the duration of the call.
pub fn evaluate_password_strength(password: &SecretString) -> ScoreResult {
    score(password.expose_secret())
}

/// Async version that waits `debounce`, then sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, so a
/// newer request can supersede a pending one.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
    debounce: Duration,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let result = evaluate_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx, Duration::from_millis(300)).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(result.score, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx, Duration::from_millis(300)).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let child = token.clone();

        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("abc".to_string().into());
            evaluate_password_strength_tx(&pwd, child, tx, Duration::from_secs(5)).await;
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        token.cancel();
        handle.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        // Must not panic when nobody is listening
        evaluate_password_strength_tx(&pwd, token, tx, Duration::ZERO).await;
    }
}
