//! Length section - reports the best length tier reached.

use crate::criteria::{Criteria, CriterionKind, CriterionReport};

/// Three-way length report: good length, minimum length, or too short.
pub fn length_section(criteria: &Criteria) -> CriterionReport {
    let (met, message) = if criteria.has_good_length {
        (true, "Good length (12+ characters)")
    } else if criteria.is_long_enough {
        (true, "Minimum length (8+ characters)")
    } else {
        (false, "Too short (min 8 characters)")
    };
    CriterionReport {
        kind: CriterionKind::Length,
        met,
        message,
    }
}
