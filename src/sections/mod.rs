//! Criteria report sections
//!
//! Each section turns one category of criteria into a single report line.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{lowercase_section, numbers_section, special_section, uppercase_section};

use crate::criteria::{Criteria, CriterionReport};

/// Signature shared by every report section.
pub type SectionFn = fn(&Criteria) -> CriterionReport;
