//! Strength criteria - the six independent predicates a password is scored on.

use serde::Serialize;
use std::fmt;

/// Symbols counted towards the special-character criterion.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '_', '-', '+', '=', '?'];

/// Minimum acceptable length.
pub const MIN_LENGTH: usize = 8;

/// Length at which a password earns the extra length point.
pub const GOOD_LENGTH: usize = 12;

/// Pass/fail flags for every criterion, each evaluated on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Criteria {
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_numbers: bool,
    pub has_special_char: bool,
    pub is_long_enough: bool,
    pub has_good_length: bool,
}

impl Criteria {
    /// Evaluates all criteria against `password`.
    ///
    /// Length is measured in characters, not bytes.
    pub fn evaluate(password: &str) -> Self {
        let len = password.chars().count();
        Self {
            has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
            has_numbers: password.chars().any(|c| c.is_ascii_digit()),
            has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
            is_long_enough: len >= MIN_LENGTH,
            has_good_length: len >= GOOD_LENGTH,
        }
    }

    /// Number of satisfied criteria, 0 to 6.
    pub fn count(&self) -> u8 {
        [
            self.has_upper_case,
            self.has_lower_case,
            self.has_numbers,
            self.has_special_char,
            self.is_long_enough,
            self.has_good_length,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }
}

/// Category a report line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
    Length,
}

/// One line of the criteria report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionReport {
    pub kind: CriterionKind,
    pub met: bool,
    pub message: &'static str,
}

impl CriterionReport {
    pub fn marker(&self) -> char {
        if self.met { '✓' } else { '✗' }
    }
}

impl fmt::Display for CriterionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.message)
    }
}
