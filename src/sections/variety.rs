//! Character variety sections - uppercase, lowercase, numbers, special chars.

use crate::criteria::{Criteria, CriterionKind, CriterionReport};

fn presence(
    kind: CriterionKind,
    met: bool,
    pass: &'static str,
    fail: &'static str,
) -> CriterionReport {
    CriterionReport {
        kind,
        met,
        message: if met { pass } else { fail },
    }
}

pub fn uppercase_section(criteria: &Criteria) -> CriterionReport {
    presence(
        CriterionKind::Uppercase,
        criteria.has_upper_case,
        "Contains uppercase letters",
        "Add uppercase letters",
    )
}

pub fn lowercase_section(criteria: &Criteria) -> CriterionReport {
    presence(
        CriterionKind::Lowercase,
        criteria.has_lower_case,
        "Contains lowercase letters",
        "Add lowercase letters",
    )
}

pub fn numbers_section(criteria: &Criteria) -> CriterionReport {
    presence(
        CriterionKind::Numbers,
        criteria.has_numbers,
        "Contains numbers",
        "Add numbers",
    )
}

pub fn special_section(criteria: &Criteria) -> CriterionReport {
    presence(
        CriterionKind::Special,
        criteria.has_special_char,
        "Contains special characters",
        "Add special characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_sections_missing_everything() {
        let criteria = Criteria::default();
        assert_eq!(uppercase_section(&criteria).message, "Add uppercase letters");
        assert_eq!(lowercase_section(&criteria).message, "Add lowercase letters");
        assert_eq!(numbers_section(&criteria).message, "Add numbers");
        assert_eq!(special_section(&criteria).message, "Add special characters");
        assert!(!special_section(&criteria).met);
    }

    #[test]
    fn test_variety_sections_all_categories() {
        let criteria = Criteria::evaluate("HasAll123!");
        assert_eq!(uppercase_section(&criteria).to_string(), "✓ Contains uppercase letters");
        assert_eq!(lowercase_section(&criteria).to_string(), "✓ Contains lowercase letters");
        assert_eq!(numbers_section(&criteria).to_string(), "✓ Contains numbers");
        assert_eq!(special_section(&criteria).to_string(), "✓ Contains special characters");
    }

    #[test]
    fn test_variety_section_missing_special() {
        let criteria = Criteria::evaluate("NoSpecial123");
        let line = special_section(&criteria);
        assert_eq!(line.kind, CriterionKind::Special);
        assert!(!line.met);
    }
}
