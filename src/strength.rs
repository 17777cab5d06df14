//! Strength levels and their score thresholds.

use serde::Serialize;
use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 6;

/// Categorical strength derived from the criteria score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its level: `<= 2` Weak, `<= 4` Medium, otherwise Strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Short summary shown under the meter.
    pub fn detail(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Add more character types and length",
            StrengthLevel::Medium => "Good, but could be stronger",
            StrengthLevel::Strong => "Excellent password!",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Medium => "strength-medium",
            StrengthLevel::Strong => "strength-strong",
        }
    }

    /// Meter fill, in percent.
    pub fn meter_percent(&self) -> u8 {
        match self {
            StrengthLevel::Weak => 33,
            StrengthLevel::Medium => 66,
            StrengthLevel::Strong => 100,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
