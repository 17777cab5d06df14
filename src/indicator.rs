//! Strength indicator - view model for the meter shown next to a password.

use serde::Serialize;

use crate::evaluator::{ScoreResult, score};
use crate::strength::MAX_SCORE;

/// Container class used when no level applies.
pub const BASE_CLASS: &str = "password-strength";

/// Everything a view needs to draw the meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthIndicator {
    pub text: &'static str,
    /// Full container class, e.g. `password-strength strength-weak`.
    pub class: String,
    pub meter_percent: u8,
    pub score: u8,
    pub max_score: u8,
    pub detail: Option<&'static str>,
    /// Rendered report lines, e.g. `✓ Contains numbers`.
    pub criteria: Vec<String>,
}

impl StrengthIndicator {
    /// Blank indicator shown before any password exists.
    pub fn cleared() -> Self {
        Self {
            text: "-",
            class: BASE_CLASS.to_string(),
            meter_percent: 0,
            score: 0,
            max_score: MAX_SCORE,
            detail: None,
            criteria: Vec::new(),
        }
    }

    /// Indicator for `password`; empty input clears the meter instead of scoring.
    pub fn for_password(password: &str) -> Self {
        if password.is_empty() {
            return Self::cleared();
        }
        Self::from_result(&score(password))
    }

    pub fn from_result(result: &ScoreResult) -> Self {
        Self {
            text: result.level.label(),
            class: format!("{} {}", BASE_CLASS, result.level.css_class()),
            meter_percent: result.level.meter_percent(),
            score: result.score,
            max_score: MAX_SCORE,
            detail: Some(result.detail),
            criteria: result.report.iter().map(|line| line.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_empty_password_clears() {
        let indicator = StrengthIndicator::for_password("");
        assert_eq!(indicator, StrengthIndicator::cleared());
        assert_eq!(indicator.text, "-");
        assert_eq!(indicator.class, "password-strength");
        assert_eq!(indicator.meter_percent, 0);
        assert!(indicator.criteria.is_empty());
    }

    #[test]
    fn test_indicator_weak() {
        let indicator = StrengthIndicator::for_password("abc");
        assert_eq!(indicator.text, "Weak");
        assert_eq!(indicator.class, "password-strength strength-weak");
        assert_eq!(indicator.meter_percent, 33);
        assert_eq!(indicator.detail, Some("Add more character types and length"));
    }

    #[test]
    fn test_indicator_medium() {
        let indicator = StrengthIndicator::for_password("Abcdefgh1");
        assert_eq!(indicator.text, "Medium");
        assert_eq!(indicator.meter_percent, 66);
        assert_eq!(indicator.score, 4);
        assert_eq!(indicator.max_score, 6);
    }

    #[test]
    fn test_indicator_strong_criteria_lines() {
        let indicator = StrengthIndicator::for_password("Abcdefghij1!");
        assert_eq!(indicator.class, "password-strength strength-strong");
        assert_eq!(indicator.meter_percent, 100);
        assert_eq!(
            indicator.criteria,
            vec![
                "✓ Contains uppercase letters",
                "✓ Contains lowercase letters",
                "✓ Contains numbers",
                "✓ Contains special characters",
                "✓ Good length (12+ characters)",
            ]
        );
    }
}
