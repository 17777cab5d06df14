//! Generate request - the validated quantity posted to the password endpoint.

use crate::config::QuantityRange;
use std::fmt;
use thiserror::Error;

/// Endpoint the generator form posts to.
pub const GENERATE_PATH: &str = "/generate_password";

/// Content type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity is not a number: {input:?}")]
    NotANumber { input: String, min: u32, max: u32 },
    #[error("Quantity {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

impl QuantityError {
    /// Text shown to the user when the quantity is rejected.
    pub fn user_message(&self) -> String {
        let (min, max) = match self {
            QuantityError::NotANumber { min, max, .. } => (min, max),
            QuantityError::OutOfRange { min, max, .. } => (min, max),
        };
        format!("Please enter a number between {} and {}", min, max)
    }
}

/// Requested password length, guaranteed to lie within the configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Parses user input into a quantity.
    ///
    /// Surrounding whitespace is ignored. Bounds are inclusive.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Input is not an integer
    /// - Integer lies outside `range`
    pub fn parse(input: &str, range: &QuantityRange) -> Result<Self, QuantityError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| QuantityError::NotANumber {
                input: trimmed.to_string(),
                min: range.min(),
                max: range.max(),
            })?;
        Self::new(value, range)
    }

    pub fn new(value: i64, range: &QuantityRange) -> Result<Self, QuantityError> {
        match u32::try_from(value) {
            Ok(v) if range.contains(v) => Ok(Self(v)),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Rejected quantity {} (allowed {}..={})",
                    value,
                    range.min(),
                    range.max()
                );
                Err(QuantityError::OutOfRange {
                    value,
                    min: range.min(),
                    max: range.max(),
                })
            }
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Form-encoded request body, e.g. `quantity=16`.
    pub fn to_form_body(&self) -> String {
        format!("quantity={}", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
