//! Generate response - interprets what the password endpoint sent back.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::evaluator::{ScoreResult, evaluate_password_strength};
use crate::request::QuantityError;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("{0}")]
    Server(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl GenerateError {
    /// Text shown to the user in the blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::InvalidQuantity(e) => e.user_message(),
            other => format!("Error generating password: {}", other),
        }
    }
}

// Fields are optional so `{error}` and `{password, length}` share one shape.
#[derive(Deserialize)]
struct RawResponse {
    password: Option<String>,
    length: Option<usize>,
    error: Option<String>,
}

/// A password returned by the endpoint, already scored.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    /// Length reported by the server.
    pub length: usize,
    pub strength: ScoreResult,
}

/// Interprets an endpoint response.
///
/// A non-empty `error` field takes precedence over any `password` in the same
/// payload. When the server omits `length`, the password's character count is
/// used instead.
///
/// # Errors
///
/// Returns error if:
/// - `status` is not 2xx
/// - `body` is not a JSON object of the expected shape
/// - The server reported an error
/// - No password was returned
pub fn interpret_response(status: u16, body: &str) -> Result<GeneratedPassword, GenerateError> {
    if !(200..=299).contains(&status) {
        #[cfg(feature = "tracing")]
        tracing::error!("Password endpoint returned status {}", status);
        return Err(GenerateError::Http(status));
    }

    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Malformed(e.to_string()))?;

    if let Some(error) = raw.error.filter(|e| !e.is_empty()) {
        #[cfg(feature = "tracing")]
        tracing::error!("Password endpoint reported an error: {}", error);
        return Err(GenerateError::Server(error));
    }

    let password = match raw.password {
        Some(p) if !p.is_empty() => SecretString::new(p.into()),
        _ => return Err(GenerateError::Malformed("missing password".to_string())),
    };

    let length = raw
        .length
        .unwrap_or_else(|| password.expose_secret().chars().count());
    let strength = evaluate_password_strength(&password);

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Received password of length {}: {} ({}/{})",
        length,
        strength.level,
        strength.score,
        crate::strength::MAX_SCORE
    );

    Ok(GeneratedPassword {
        password,
        length,
        strength,
    })
}
